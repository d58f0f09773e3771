//! DTO for decoding the upstream fact payload.
//!
//! Unknown fields (the public API also returns `length`) are ignored.

use serde::Deserialize;

use crate::domain::Fact;

#[derive(Debug, Deserialize)]
pub(super) struct CatFactDto {
    #[serde(default)]
    pub(super) fact: Option<String>,
}

impl CatFactDto {
    pub(super) fn into_domain_fact(self) -> Result<Fact, String> {
        let text = self
            .fact
            .ok_or_else(|| "payload has no `fact` field".to_owned())?;
        Fact::new(text).map_err(|error| format!("payload `fact` rejected: {error}"))
    }
}
