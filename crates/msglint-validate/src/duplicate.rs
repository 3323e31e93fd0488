use crate::declaration::Declaration;
use crate::finding::{Finding, FindingKind};

/// Flags every tagged declaration of an overload group after the first.
///
/// Untagged declarations in between do not reset the scan, so `k` tagged
/// declarations yield `k - 1` findings.
pub fn duplicate_message_tags<'d>(
    group: &[&'d Declaration],
) -> impl Iterator<Item = Finding<'d>> {
    group
        .iter()
        .copied()
        .filter(|decl| decl.message_tag)
        .skip(1)
        .map(|decl| Finding::new(decl, FindingKind::DuplicateMessageTag))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decl(tagged: bool) -> Declaration {
        Declaration::builder()
            .name("fail")
            .parameter_count(1)
            .message_tag(tagged)
            .build()
    }

    fn flagged(group: &[&Declaration]) -> Vec<usize> {
        duplicate_message_tags(group)
            .map(|finding| {
                group
                    .iter()
                    .position(|decl| std::ptr::eq(*decl, finding.target()))
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_single_tag_is_fine() {
        let (a, b) = (decl(true), decl(false));
        assert!(flagged(&[&a, &b]).is_empty());
        assert!(flagged(&[&b, &a]).is_empty());
        assert!(flagged(&[]).is_empty());
    }

    #[test]
    fn test_later_tags_flagged() {
        let (a, b, c) = (decl(true), decl(true), decl(true));
        assert_eq!(flagged(&[&a, &b]), vec![1]);
        assert_eq!(flagged(&[&a, &b, &c]), vec![1, 2]);
    }

    #[test]
    fn test_untagged_does_not_reset() {
        let (t1, u, t2, t3) = (decl(true), decl(false), decl(true), decl(true));
        assert_eq!(flagged(&[&t1, &u, &t2, &u, &t3]), vec![2, 4]);
        assert_eq!(flagged(&[&u, &t1, &u, &t2]), vec![3]);
    }
}
