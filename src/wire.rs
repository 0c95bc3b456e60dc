use serde::Deserialize;

use crate::{Page, Record};

/// The records endpoint answers in one of two shapes: a bare array of record
/// objects, or an envelope wrapping the array with an explicit continuation
/// flag.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PageBody {
    Bare(Vec<Record>),
    Envelope {
        #[serde(alias = "records")]
        data: Vec<Record>,
        #[serde(default, rename = "hasNext")]
        has_next: Option<bool>,
    },
}

impl PageBody {
    pub(crate) fn into_page(self) -> Page {
        match self {
            Self::Bare(records) => Page {
                records,
                has_next: None,
            },
            Self::Envelope { data, has_next } => Page {
                records: data,
                has_next,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PageBody;

    #[test]
    fn decodes_bare_array() {
        let body: PageBody =
            serde_json::from_str(r#"[{"id": 1}, {"id": 2}]"#).expect("must decode");
        let page = body.into_page();
        assert_eq!(page.records.len(), 2);
        assert_eq!(page.has_next, None);
    }

    #[test]
    fn decodes_envelope_with_continuation_flag() {
        let body: PageBody = serde_json::from_str(r#"{"data": [{"id": 1}], "hasNext": false}"#)
            .expect("must decode");
        let page = body.into_page();
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.has_next, Some(false));
    }

    #[test]
    fn decodes_envelope_under_records_key() {
        let body: PageBody =
            serde_json::from_str(r#"{"records": [{"id": 1}, {"id": 2}, {"id": 3}]}"#)
                .expect("must decode");
        let page = body.into_page();
        assert_eq!(page.records.len(), 3);
        assert_eq!(page.has_next, None);
    }

    #[test]
    fn rejects_non_page_shapes() {
        assert!(serde_json::from_str::<PageBody>(r#"{"error": "boom"}"#).is_err());
        assert!(serde_json::from_str::<PageBody>("42").is_err());
    }
}
