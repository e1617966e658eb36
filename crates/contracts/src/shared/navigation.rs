use serde::{Deserialize, Serialize};

/// Query-string representation of a navigation selection.
///
/// `?module=validation-bc&main=pending&sub=all&subSub=list`. Every field may
/// be omitted; missing `sub`/`subSub` resolve to the module defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(rename = "subSub", default, skip_serializing_if = "Option::is_none")]
    pub sub_sub: Option<String>,
}

impl NavQuery {
    /// Drops empty values so that `?sub=` behaves like an absent parameter.
    pub fn normalized(self) -> Self {
        fn non_empty(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.trim().is_empty())
        }
        Self {
            module: non_empty(self.module),
            main: non_empty(self.main),
            sub: non_empty(self.sub),
            sub_sub: non_empty(self.sub_sub),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_drops_blank_values() {
        let q = NavQuery {
            module: Some("dashboard".into()),
            main: Some("overview".into()),
            sub: Some("".into()),
            sub_sub: Some("  ".into()),
        }
        .normalized();
        assert_eq!(q.sub, None);
        assert_eq!(q.sub_sub, None);
        assert_eq!(q.main.as_deref(), Some("overview"));
    }

    #[test]
    fn test_sub_sub_uses_camel_case_name() {
        let q = NavQuery {
            sub_sub: Some("list".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&q).unwrap();
        assert_eq!(json, r#"{"subSub":"list"}"#);
    }
}
