/// Counts tokens of `a` that occur anywhere in `b` by exact string equality.
///
/// Duplicates on the left side each count separately when matched; the right
/// side is only probed for membership. Empty input on either side scores 0.
pub fn score(a: &[String], b: &[String]) -> usize {
    a.iter()
        .filter(|keyword| b.iter().any(|other| other == *keyword))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn counts_exact_overlap() {
        let lost = words(&["wallet", "black", "leather"]);
        let found = words(&["wallet", "leather", "brown"]);
        assert_eq!(score(&lost, &found), 2);
    }

    #[test]
    fn empty_sides_score_zero() {
        let some = words(&["wallet"]);
        assert_eq!(score(&[], &some), 0);
        assert_eq!(score(&some, &[]), 0);
        assert_eq!(score(&[], &[]), 0);
    }

    #[test]
    fn left_duplicates_each_count() {
        let lost = words(&["blue", "blue", "bag"]);
        let found = words(&["blue", "backpack"]);
        assert_eq!(score(&lost, &found), 2);
        // right-side duplicates do not inflate the count
        assert_eq!(score(&found, &lost), 1);
    }

    #[test]
    fn deterministic() {
        let a = words(&["phone", "black", "case"]);
        let b = words(&["black", "phone"]);
        assert_eq!(score(&a, &b), score(&a, &b));
    }
}
