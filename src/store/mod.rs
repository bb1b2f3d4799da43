use crate::domain::Contact;
use crate::errors::AppError;

pub struct ChainEntry {
    pub key: String,
    pub value: Contact,
}

/// Fixed-capacity hash table mapping contact names to contacts,
/// with separate chaining per bucket. Capacity never changes and
/// entries are never removed; inserting an existing name replaces
/// its contact.
pub struct ContactStore {
    buckets: Vec<Vec<ChainEntry>>,
    capacity: usize,
    len: usize,
}

impl ContactStore {
    pub fn new(capacity: usize) -> Result<Self, AppError> {
        if capacity == 0 {
            return Err(AppError::InvalidCapacity(capacity));
        }

        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);

        Ok(Self {
            buckets,
            capacity,
            len: 0,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of contacts across all buckets.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Bucket a key hashes to: unweighted sum of the key's character
    /// code points, mod capacity. Unseeded and deterministic, so
    /// anagrams ("Amy"/"May") always collide. Legacy tables were built
    /// with this exact function; keep it bit-for-bit.
    pub fn bucket_index(&self, key: &str) -> usize {
        let sum = key.chars().fold(0u64, |acc, c| acc.wrapping_add(c as u64));

        (sum % self.capacity as u64) as usize
    }

    pub fn insert(&mut self, name: &str, number: &str) {
        let index = self.bucket_index(name);
        let chain = &mut self.buckets[index];

        // Duplicate name updates in place: swap in a fresh Contact
        // rather than poking fields on the old one.
        if let Some(entry) = chain.iter_mut().find(|entry| entry.key == name) {
            entry.value = Contact::new(name, number);
            return;
        }

        // New names append at the tail, so a chain reads in
        // insertion order.
        chain.push(ChainEntry {
            key: name.to_string(),
            value: Contact::new(name, number),
        });
        self.len += 1;
    }

    /// Walks the key's chain head to tail. `None` means the name was
    /// never inserted, which is an ordinary outcome, not an error.
    pub fn search(&self, name: &str) -> Option<&Contact> {
        let index = self.bucket_index(name);

        self.buckets[index]
            .iter()
            .find(|entry| entry.key == name)
            .map(|entry| &entry.value)
    }

    /// Read-only walk over every bucket in index order, for printing
    /// and diagnostics. Restartable; never mutates the table.
    pub fn buckets(&self) -> BucketIter<'_> {
        BucketIter {
            inner: &self.buckets,
            idx: 0,
        }
    }
}

pub struct Bucket<'a> {
    index: usize,
    entries: &'a [ChainEntry],
}

impl<'a> Bucket<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Contacts chained in this bucket, in insertion order.
    pub fn contacts(&self) -> impl Iterator<Item = &'a Contact> {
        self.entries.iter().map(|entry| &entry.value)
    }
}

pub struct BucketIter<'a> {
    inner: &'a [Vec<ChainEntry>],
    idx: usize,
}

impl<'a> Iterator for BucketIter<'a> {
    type Item = Bucket<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx >= self.inner.len() {
            return None;
        }
        let bucket = Bucket {
            index: self.idx,
            entries: &self.inner[self.idx],
        };
        self.idx += 1;
        Some(bucket)
    }
}
