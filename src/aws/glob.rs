use regex::{escape, Regex, RegexBuilder};

fn pattern_from_glob(glob: &str) -> String {
    let mut literal = String::new();
    let mut pattern = glob.chars().fold(String::from('^'), |mut acc, c| {
        match c {
            '?' | '*' => {
                if !literal.is_empty() {
                    acc.push_str(&escape(&literal));
                    literal.clear();
                }
                acc.push_str(if c == '?' { "." } else { ".*" });
            }
            _ => literal.push(c),
        };
        acc
    });
    pattern.push_str(&escape(&literal));
    pattern.push('$');
    pattern
}

fn is_literal(glob: &str) -> bool {
    !glob.contains(['?', '*'])
}

pub fn try_regex_from_glob(glob: &str, ignore_case: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&pattern_from_glob(glob))
        .case_insensitive(ignore_case)
        .build()
}

pub fn glob_matches(glob: &str, target: &str) -> bool {
    if is_literal(glob) {
        return target == glob;
    }
    // Every non-wildcard character is escaped, so compilation only fails if
    // the pattern exceeds the regex size limit.
    try_regex_from_glob(glob, false).map_or(false, |re| re.is_match(target))
}

/// Like [`glob_matches`], but ignoring case. IAM compares action names this
/// way, so `dynamodb:getitem` and `DynamoDB:Get*` both select `dynamodb:GetItem`.
pub fn glob_matches_ignore_case(glob: &str, target: &str) -> bool {
    if is_literal(glob) {
        return target.eq_ignore_ascii_case(glob);
    }
    try_regex_from_glob(glob, true).map_or(false, |re| re.is_match(target))
}

#[cfg(test)]
mod test {
    use super::{glob_matches, glob_matches_ignore_case, pattern_from_glob};

    #[test]
    fn test_literal_pattern() {
        assert_eq!(pattern_from_glob(""), "^$");
        assert_eq!(pattern_from_glob("table/Orders"), "^table/Orders$");
        assert_eq!(pattern_from_glob("a.b"), "^a\\.b$");
    }

    #[test]
    fn test_wildcard_pattern() {
        assert_eq!(pattern_from_glob("?"), "^.$");
        assert_eq!(pattern_from_glob("Get?tem"), "^Get.tem$");
        assert_eq!(pattern_from_glob("*"), "^.*$");
        assert_eq!(pattern_from_glob("Get*"), "^Get.*$");
        assert_eq!(pattern_from_glob("*Item"), "^.*Item$");
    }

    #[test]
    fn test_literal() {
        assert!(glob_matches("", ""));
        assert!(glob_matches("PutItem", "PutItem"));
        assert!(! glob_matches("PutItem", "putitem"));
        assert!(! glob_matches("PutItem", "PutItems"));
    }

    #[test]
    fn test_wildcards() {
        assert!(glob_matches("Get*", "GetItem"));
        assert!(glob_matches("Get*", "Get"));
        assert!(glob_matches("*Item", "BatchGetItem"));
        assert!(glob_matches("Get?tem", "GetItem"));
        assert!(! glob_matches("Get?tem", "Gettem"));
        assert!(! glob_matches("Get*", "BatchGetItem"));
    }

    #[test]
    fn test_ignore_case() {
        assert!(glob_matches_ignore_case("putitem", "PutItem"));
        assert!(glob_matches_ignore_case("get*", "GetItem"));
        assert!(glob_matches_ignore_case("*ITEM", "DeleteItem"));
        assert!(! glob_matches_ignore_case("get*", "BatchGetItem"));
    }
}
