use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BufferId(u64);

impl BufferId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Wire form of a buffer, persisted as an ordered list under the project key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BufferRecord {
    pub id: u64,
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct Buffer {
    pub id: BufferId,
    pub name: CompactString,
    pub content: String,
}

impl Buffer {
    fn record(&self) -> BufferRecord {
        BufferRecord {
            id: self.id.raw(),
            name: self.name.to_string(),
            content: self.content.clone(),
        }
    }
}

/// Ordered set of open buffers plus the active reference.
///
/// Insertion order is display order. `active` is `None` only while the
/// session is empty; every mutation keeps it pointing at an existing buffer.
pub struct Session {
    buffers: Vec<Buffer>,
    active: Option<BufferId>,
    index_by_id: FxHashMap<BufferId, usize>,
    next_id: u64,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("buffers_len", &self.buffers.len())
            .field("active", &self.active)
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            buffers: Vec::new(),
            active: None,
            index_by_id: FxHashMap::default(),
            next_id: 1,
        }
    }

    pub fn buffers(&self) -> impl Iterator<Item = &Buffer> {
        self.buffers.iter()
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    pub fn contains(&self, id: BufferId) -> bool {
        self.index_by_id.contains_key(&id)
    }

    pub fn get(&self, id: BufferId) -> Option<&Buffer> {
        let index = self.index_by_id.get(&id).copied()?;
        self.buffers.get(index)
    }

    pub fn active_id(&self) -> Option<BufferId> {
        self.active
    }

    pub fn active_buffer(&self) -> Option<&Buffer> {
        self.get(self.active?)
    }

    fn alloc_id(&mut self) -> BufferId {
        let id = BufferId::new(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        id
    }

    /// Appends an empty buffer and makes it active. `name` must already be
    /// validated non-empty by the caller.
    pub fn create(&mut self, name: &str) -> BufferId {
        self.insert(name, String::new())
    }

    /// Appends a buffer with imported content and makes it active.
    pub fn insert(&mut self, name: &str, content: String) -> BufferId {
        debug_assert!(!name.trim().is_empty());
        let id = self.alloc_id();
        self.index_by_id.insert(id, self.buffers.len());
        self.buffers.push(Buffer {
            id,
            name: CompactString::from(name),
            content,
        });
        self.active = Some(id);
        id
    }

    pub fn set_active(&mut self, id: BufferId) -> bool {
        if !self.contains(id) || self.active == Some(id) {
            return false;
        }
        self.active = Some(id);
        true
    }

    /// Flushes live surface text into the active buffer. Returns whether the
    /// stored content actually changed.
    pub fn flush_active(&mut self, text: &str) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let Some(index) = self.index_by_id.get(&active).copied() else {
            return false;
        };
        let buffer = &mut self.buffers[index];
        if buffer.content == text {
            return false;
        }
        buffer.content.clear();
        buffer.content.push_str(text);
        true
    }

    /// Removes a buffer. If it was active, the last remaining buffer in
    /// order becomes active (or the session goes inactive when empty).
    pub fn remove(&mut self, id: BufferId) -> bool {
        let Some(index) = self.index_by_id.remove(&id) else {
            return false;
        };
        self.buffers.remove(index);
        for (i, buffer) in self.buffers.iter().enumerate().skip(index) {
            self.index_by_id.insert(buffer.id, i);
        }
        if self.active == Some(id) {
            self.active = self.buffers.last().map(|b| b.id);
        }
        true
    }

    /// Snapshot of the whole session for persistence.
    pub fn records(&self) -> Vec<BufferRecord> {
        self.buffers.iter().map(Buffer::record).collect()
    }

    /// Rebuilds the session verbatim from persisted records and activates
    /// the first buffer. The id allocator resumes past the highest id seen.
    pub fn restore(&mut self, records: Vec<BufferRecord>) {
        self.buffers.clear();
        self.index_by_id.clear();
        self.next_id = 1;
        for record in records {
            let id = BufferId::new(record.id);
            if self.index_by_id.contains_key(&id) {
                tracing::warn!(id = record.id, "duplicate buffer id in stored session, skipping");
                continue;
            }
            self.index_by_id.insert(id, self.buffers.len());
            self.buffers.push(Buffer {
                id,
                name: CompactString::from(record.name),
                content: record.content,
            });
            self.next_id = self.next_id.max(id.raw().saturating_add(1));
        }
        self.active = self.buffers.first().map(|b| b.id);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
