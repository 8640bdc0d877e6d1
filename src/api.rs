//! Raw calls against the scoreboard backend's two collection endpoints.

use tracing::{debug, instrument};

use crate::error::{Result, ScoreboardError};
use crate::model::MatchRecord;

/// Fetch the full match collection. An empty body yields an empty list.
#[instrument(skip(client))]
pub(crate) async fn fetch_matches(
    client: &reqwest::Client,
    base_url: &str,
) -> Result<Vec<MatchRecord>> {
    let url = format!("{base_url}/matches");
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|source| ScoreboardError::Http {
            url: url.clone(),
            source,
        })?;
    let status = response.status();
    if !status.is_success() {
        return Err(ScoreboardError::UnexpectedStatus { url, status });
    }
    let matches: Vec<MatchRecord> = response
        .json()
        .await
        .map_err(|source| ScoreboardError::Decode {
            url: url.clone(),
            source,
        })?;
    debug!(count = matches.len(), "fetched match collection");
    Ok(matches)
}

/// Create one match on the backend. The acknowledgement body is ignored.
#[instrument(skip(client, record), fields(match_number = record.match_number))]
pub(crate) async fn create_match(
    client: &reqwest::Client,
    base_url: &str,
    record: &MatchRecord,
) -> Result<()> {
    let url = format!("{base_url}/matches/create");
    let response = client
        .post(&url)
        .json(record)
        .send()
        .await
        .map_err(|source| ScoreboardError::Http {
            url: url.clone(),
            source,
        })?;
    let status = response.status();
    if !status.is_success() {
        return Err(ScoreboardError::UnexpectedStatus { url, status });
    }
    debug!(match_number = record.match_number, "created match");
    Ok(())
}
