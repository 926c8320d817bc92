use serde::Deserialize;
use serde_json::Value;

use super::Transport;
use crate::consts::{DOG_URL, UNKNOWN};
use crate::error::FetchError;
use crate::utils::debug_enabled;

/// Outcome of reading a breed out of an image URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BreedParse {
    Parsed(String),
    Unparsed,
}

impl BreedParse {
    pub(crate) fn parsed(&self) -> Option<&str> {
        match self {
            BreedParse::Parsed(breed) => Some(breed.as_str()),
            BreedParse::Unparsed => None,
        }
    }

    /// Display label, "unknown" when parsing failed
    pub(crate) fn label(&self) -> &str {
        self.parsed().unwrap_or(UNKNOWN)
    }
}

/// Breed from a URL like `https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg`.
///
/// Takes the path segment after `breeds/` and replaces `-` with a space.
pub(crate) fn parse_breed(url: &str) -> BreedParse {
    let Some((_, rest)) = url.split_once("/breeds/") else {
        return BreedParse::Unparsed;
    };
    match rest.split_once('/') {
        Some((slug, _)) if !slug.is_empty() => BreedParse::Parsed(slug.replace('-', " ")),
        _ => BreedParse::Unparsed,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DogInfo {
    pub(crate) image_url: String,
    pub(crate) breed: BreedParse,
}

#[derive(Debug, Deserialize)]
struct DogResponse {
    status: String,
    message: String,
}

fn parse_dog(body: Value) -> Result<DogInfo, FetchError> {
    let parsed: DogResponse =
        serde_json::from_value(body).map_err(|e| FetchError::Malformed(e.to_string()))?;
    if parsed.status != "success" {
        return Err(FetchError::Malformed(format!("status \"{}\"", parsed.status)));
    }
    Ok(DogInfo {
        breed: parse_breed(&parsed.message),
        image_url: parsed.message,
    })
}

pub(crate) struct DogClient<'a> {
    transport: &'a dyn Transport,
    url: String,
}

impl<'a> DogClient<'a> {
    pub(crate) fn new(transport: &'a dyn Transport) -> Self {
        Self::with_url(transport, DOG_URL)
    }

    pub(crate) fn with_url(transport: &'a dyn Transport, url: &str) -> Self {
        Self {
            transport,
            url: url.to_string(),
        }
    }

    /// Random dog image, or None on any failure
    pub(crate) fn fetch(&self) -> Option<DogInfo> {
        match self.transport.get_json(&self.url, &[]).and_then(parse_dog) {
            Ok(info) => Some(info),
            Err(e) => {
                if debug_enabled() {
                    eprintln!("[DEBUG] Dog image lookup failed: {e}");
                }
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::testing::{FakeTransport, Reply};
    use serde_json::json;

    #[test]
    fn parse_breed_from_sub_breed_slug() {
        assert_eq!(
            parse_breed("https://images.dog.ceo/breeds/hound-afghan/n02088094_1003.jpg"),
            BreedParse::Parsed("hound afghan".to_string())
        );
        assert_eq!(
            parse_breed("https://images.dog.ceo/breeds/pug/x.jpg").label(),
            "pug"
        );
    }

    #[test]
    fn parse_breed_without_segment_is_unparsed() {
        assert_eq!(parse_breed("https://images.dog.ceo/dogs/x.jpg"), BreedParse::Unparsed);
        assert_eq!(parse_breed("https://images.dog.ceo/breeds/"), BreedParse::Unparsed);
        assert_eq!(parse_breed("https://images.dog.ceo/breeds//x.jpg"), BreedParse::Unparsed);
        assert_eq!(parse_breed("").label(), "unknown");
    }

    #[test]
    fn success_returns_url_and_breed() {
        let url = "https://images.dog.ceo/breeds/hound-afghan/x.jpg";
        let transport = FakeTransport::new().route(
            DOG_URL,
            Reply::Json(json!({"status": "success", "message": url})),
        );
        let dog = DogClient::new(&transport).fetch().unwrap();
        assert_eq!(dog.image_url, url);
        assert_eq!(dog.breed.label(), "hound afghan");
    }

    #[test]
    fn unparsable_url_still_returns_image() {
        let transport = FakeTransport::new().route(
            DOG_URL,
            Reply::Json(json!({"status": "success", "message": "https://cdn.example/dog.jpg"})),
        );
        let dog = DogClient::new(&transport).fetch().unwrap();
        assert_eq!(dog.breed, BreedParse::Unparsed);
        assert_eq!(dog.breed.label(), "unknown");
    }

    #[test]
    fn non_success_status_is_none() {
        let transport = FakeTransport::new().route(
            DOG_URL,
            Reply::Json(json!({"status": "error", "message": "Breed not found"})),
        );
        assert!(DogClient::new(&transport).fetch().is_none());
    }

    #[test]
    fn transport_failures_are_none() {
        for reply in [
            Reply::Status(503),
            Reply::Timeout,
            Reply::Garbage,
            Reply::Json(json!({"status": "success"})),
        ] {
            let transport = FakeTransport::new().route(DOG_URL, reply);
            assert!(DogClient::new(&transport).fetch().is_none());
        }
    }
}
