//! Loading order.

use std::cmp::Reverse;
use truck_loader_core::Crate;

/// Returns the crates in loading order: largest volume first.
///
/// The sort is stable, so crates of equal volume keep their input order. A
/// crate's position in the returned list is its loading step number.
pub fn loading_order(crates: &[Crate]) -> Vec<&Crate> {
    let mut ordered: Vec<&Crate> = crates.iter().collect();
    ordered.sort_by_key(|item| Reverse(item.volume()));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(ordered: &[&Crate]) -> Vec<u32> {
        ordered.iter().map(|item| item.id()).collect()
    }

    #[test]
    fn test_descending_volume() {
        let crates = vec![
            Crate::new(1, 1, 1, 1),
            Crate::new(2, 3, 3, 3),
            Crate::new(3, 2, 2, 2),
        ];
        assert_eq!(ids(&loading_order(&crates)), vec![2, 3, 1]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let crates = vec![
            Crate::new(10, 2, 1, 1),
            Crate::new(4, 1, 1, 1),
            Crate::new(7, 1, 2, 1),
            Crate::new(1, 1, 1, 2),
        ];
        assert_eq!(ids(&loading_order(&crates)), vec![10, 7, 1, 4]);
    }

    #[test]
    fn test_empty() {
        assert!(loading_order(&[]).is_empty());
    }
}
