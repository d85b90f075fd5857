/**
 * Pending floor requests.
 *
 * Holds each floor at most once. Insertion order is kept so that snapshots
 * print the same way every time for the same sequence of calls.
 */
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSet {
    floors: Vec<i32>,
}

impl RequestSet {
    pub fn new() -> RequestSet {
        RequestSet { floors: Vec::new() }
    }

    pub fn contains(&self, floor: i32) -> bool {
        self.floors.contains(&floor)
    }

    /// Returns `false` if the floor was already pending.
    pub fn insert(&mut self, floor: i32) -> bool {
        if self.contains(floor) {
            return false;
        }
        self.floors.push(floor);
        true
    }

    /// Returns `false` if the floor was not pending.
    pub fn remove(&mut self, floor: i32) -> bool {
        match self.floors.iter().position(|&f| f == floor) {
            Some(index) => {
                self.floors.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.floors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.floors.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.floors.clone()
    }
}

#[cfg(test)]
mod requests_tests {
    use super::RequestSet;

    #[test]
    fn test_insert_rejects_duplicates() {
        let mut requests = RequestSet::new();

        assert!(requests.insert(4));
        assert!(requests.insert(2));
        assert!(!requests.insert(4));

        assert_eq!(requests.to_vec(), vec![4, 2]);
    }

    #[test]
    fn test_remove_keeps_order_of_the_rest() {
        let mut requests = RequestSet::new();
        for floor in [4, 2, 8] {
            requests.insert(floor);
        }

        assert!(requests.remove(2));
        assert!(!requests.remove(2));

        assert_eq!(requests.to_vec(), vec![4, 8]);
        assert_eq!(requests.len(), 2);
    }
}
