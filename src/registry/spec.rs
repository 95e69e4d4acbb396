//! Raw package specifier parsing

/// A parsed package specifier: canonical name plus version tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpec {
    pub name: String,
    pub tag: String,
}

impl PackageSpec {
    /// Parses a raw specifier such as `"@ng-select/ng-select/8.3.0"`,
    /// `"expr-eval/latest"`, or `"sweetalert2"`.
    ///
    /// Scoped names keep their first two `/`-separated segments as the
    /// canonical name; otherwise the last segment is the tag. A bare name
    /// defaults to the `latest` dist-tag. Every input maps to some
    /// (name, tag) pair; there is no error case.
    pub fn parse(raw: &str) -> Self {
        let parts: Vec<&str> = raw.split('/').collect();

        if raw.starts_with('@') && parts.len() >= 3 {
            // @scope/name/tag -> name: @scope/name, tag: tag
            Self {
                name: parts[..2].join("/"),
                tag: parts[2].to_string(),
            }
        } else if parts.len() >= 2 {
            // name/tag -> name: name, tag: tag
            Self {
                name: parts[..parts.len() - 1].join("/"),
                tag: parts[parts.len() - 1].to_string(),
            }
        } else {
            // bare name -> latest
            Self {
                name: raw.to_string(),
                tag: "latest".to_string(),
            }
        }
    }
}
