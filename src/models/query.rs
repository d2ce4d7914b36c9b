use crate::{
    consts::pixel_const::{DEFAULT_MESSAGE_ID, DEFAULT_RECIPIENT_ID, DEFAULT_STATS_LIMIT},
    errors::{Error, Result},
};

pub type QueryPairs = Vec<(String, String)>;

// ? repeated key: first value wins
fn first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelQuery {
    pub rid: String, // recipient identifier
    pub mid: String, // message id / slug
}

impl Default for PixelQuery {
    fn default() -> Self {
        Self {
            rid: DEFAULT_RECIPIENT_ID.to_string(),
            mid: DEFAULT_MESSAGE_ID.to_string(),
        }
    }
}

impl PixelQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let defaults = Self::default();
        Self {
            rid: first(pairs, "rid").map_or(defaults.rid, str::to_owned),
            mid: first(pairs, "mid").map_or(defaults.mid, str::to_owned),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsQuery {
    pub limit: String,
}

impl StatsQuery {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            limit: first(pairs, "limit")
                .unwrap_or(DEFAULT_STATS_LIMIT)
                .to_string(),
        }
    }

    /// Whole, non-negative number of rows; anything else is an error.
    pub fn limit(&self) -> Result<i64> {
        match self.limit.trim().parse::<i64>() {
            Ok(limit) if limit >= 0 => Ok(limit),
            _ => Err(Error::InvalidLimit(self.limit.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_pixel_defaults() {
        let query = PixelQuery::from_pairs(&[]);
        assert_eq!(query.rid, "unknown");
        assert_eq!(query.mid, "");
    }

    #[test]
    fn test_pixel_first_value_wins() {
        let query = PixelQuery::from_pairs(&pairs(&[
            ("rid", "abc123"),
            ("mid", "newsletter-42"),
            ("rid", "other"),
        ]));
        assert_eq!(query.rid, "abc123");
        assert_eq!(query.mid, "newsletter-42");
    }

    #[test]
    fn test_pixel_empty_rid_is_kept() {
        let query = PixelQuery::from_pairs(&pairs(&[("rid", "")]));
        assert_eq!(query.rid, "");
    }

    #[test]
    fn test_stats_limit() {
        assert_eq!(StatsQuery::from_pairs(&[]).limit().unwrap(), 50);
        assert_eq!(
            StatsQuery::from_pairs(&pairs(&[("limit", " 7 ")])).limit().unwrap(),
            7
        );
        assert_eq!(
            StatsQuery::from_pairs(&pairs(&[("limit", "0")])).limit().unwrap(),
            0
        );
    }

    #[test]
    fn test_stats_limit_rejects_garbage() {
        for raw in ["abc", "", "1.5", "-3"] {
            let err = StatsQuery::from_pairs(&pairs(&[("limit", raw)]))
                .limit()
                .unwrap_err();
            assert!(matches!(err, Error::InvalidLimit(ref r) if r == raw));
        }
    }
}
