use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use tracing::debug;

use super::{AddRequest, ApiError, LookupResponse, SynonymsApi};

/// Connection settings for [`HttpSynonymsApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
	/// Prefix for every request. Lookups append the word verbatim.
	pub base_url: String,
	/// Per-request timeout. `None` keeps the client default.
	pub timeout: Option<Duration>,
}

impl ClientOptions {
	pub fn new(base_url: impl Into<String>) -> Self {
		Self {
			base_url: base_url.into(),
			timeout: None,
		}
	}

	#[must_use]
	pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
		self.timeout = timeout;
		self
	}
}

/// [`SynonymsApi`] backed by a blocking `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpSynonymsApi {
	client: Client,
	base_url: String,
}

impl HttpSynonymsApi {
	pub fn new(options: ClientOptions) -> Result<Self, ApiError> {
		let mut builder = Client::builder();
		if let Some(timeout) = options.timeout {
			builder = builder.timeout(timeout);
		}
		let client = builder.build().map_err(ApiError::Client)?;

		Ok(Self {
			client,
			base_url: options.base_url,
		})
	}

	/// The lookup URL is a plain concatenation of the base URL and the word.
	pub fn lookup_url(&self, word: &str) -> String {
		format!("{}{}", self.base_url, word)
	}

	fn user_agent() -> String {
		format!("synonyms/{}", env!("CARGO_PKG_VERSION"))
	}
}

impl SynonymsApi for HttpSynonymsApi {
	fn lookup(&self, word: &str) -> Result<Vec<String>, ApiError> {
		let url = self.lookup_url(word);
		debug!(%url, "looking up synonyms");

		let response = self
			.client
			.get(&url)
			.header(USER_AGENT, Self::user_agent())
			.header(ACCEPT, "application/json")
			.send()
			.map_err(|source| ApiError::Transport {
				url: url.clone(),
				source,
			})?;

		let status = response.status();
		if !status.is_success() {
			return Err(ApiError::Status {
				url,
				status: status.as_u16(),
			});
		}

		let body: LookupResponse = response
			.json()
			.map_err(|source| ApiError::Decode { url, source })?;
		Ok(body.into_synonyms())
	}

	fn create(&self, request: &AddRequest) -> Result<(), ApiError> {
		let url = self.base_url.clone();
		debug!(%url, word = %request.word, count = request.synonyms.len(), "creating synonyms");

		let response = self
			.client
			.post(&url)
			.header(USER_AGENT, Self::user_agent())
			.json(request)
			.send()
			.map_err(|source| ApiError::Transport {
				url: url.clone(),
				source,
			})?;

		let status = response.status();
		if !status.is_success() {
			return Err(ApiError::Status {
				url,
				status: status.as_u16(),
			});
		}

		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use std::io::{Read, Write};
	use std::net::{TcpListener, TcpStream};
	use std::thread::{self, JoinHandle};

	use super::*;

	/// Accept one connection, answer it with `status` and `body`, and hand back
	/// the raw request text.
	fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
		let addr = listener.local_addr().expect("addr");
		let handle = thread::spawn(move || {
			let (mut stream, _) = listener.accept().expect("accept");
			let request = read_request(&mut stream);
			let response = format!(
				"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			);
			stream.write_all(response.as_bytes()).expect("write");
			request
		});
		(format!("http://{addr}/api/synonyms/"), handle)
	}

	fn read_request(stream: &mut TcpStream) -> String {
		let mut buffer = Vec::new();
		let mut chunk = [0u8; 1024];
		loop {
			let read = stream.read(&mut chunk).expect("read");
			if read == 0 {
				break;
			}
			buffer.extend_from_slice(&chunk[..read]);
			if let Some(end) = header_end(&buffer) {
				let headers = String::from_utf8_lossy(&buffer[..end]).to_string();
				let expected = end + 4 + content_length(&headers);
				while buffer.len() < expected {
					let read = stream.read(&mut chunk).expect("read body");
					if read == 0 {
						break;
					}
					buffer.extend_from_slice(&chunk[..read]);
				}
				break;
			}
		}
		String::from_utf8_lossy(&buffer).into_owned()
	}

	fn header_end(buffer: &[u8]) -> Option<usize> {
		buffer.windows(4).position(|window| window == b"\r\n\r\n")
	}

	fn content_length(headers: &str) -> usize {
		headers
			.lines()
			.find_map(|line| {
				let (name, value) = line.split_once(':')?;
				if name.trim().eq_ignore_ascii_case("content-length") {
					value.trim().parse().ok()
				} else {
					None
				}
			})
			.unwrap_or(0)
	}

	fn api_for(base_url: String) -> HttpSynonymsApi {
		HttpSynonymsApi::new(ClientOptions::new(base_url).with_timeout(Some(Duration::from_secs(5))))
			.expect("client")
	}

	#[test]
	fn lookup_url_is_plain_concatenation() {
		let api = api_for("http://localhost:3000/api/synonyms/".into());
		assert_eq!(
			api.lookup_url("same"),
			"http://localhost:3000/api/synonyms/same"
		);
	}

	#[test]
	fn lookup_requests_word_under_base_url() {
		let (base_url, server) = serve_once("200 OK", r#"{"synonyms":["similar","alike","akin"]}"#);
		let api = api_for(base_url);

		let synonyms = api.lookup("same").expect("lookup");
		let request = server.join().expect("server");

		assert_eq!(synonyms, vec!["similar", "alike", "akin"]);
		assert!(request.starts_with("GET /api/synonyms/same HTTP/1.1"));
	}

	#[test]
	fn lookup_without_synonyms_field_is_empty() {
		let (base_url, server) = serve_once("200 OK", r#"{"word":"same"}"#);
		let api = api_for(base_url);

		let synonyms = api.lookup("same").expect("lookup");
		server.join().expect("server");

		assert!(synonyms.is_empty());
	}

	#[test]
	fn lookup_reports_non_success_status() {
		let (base_url, server) = serve_once("404 Not Found", "{}");
		let api = api_for(base_url);

		let err = api.lookup("missing").unwrap_err();
		server.join().expect("server");

		assert!(matches!(err, ApiError::Status { status: 404, .. }));
		assert!(!err.is_transport());
	}

	#[test]
	fn lookup_reports_malformed_body() {
		let (base_url, server) = serve_once("200 OK", "not json");
		let api = api_for(base_url);

		let err = api.lookup("same").unwrap_err();
		server.join().expect("server");

		assert!(matches!(err, ApiError::Decode { .. }));
	}

	#[test]
	fn lookup_reports_unreachable_service() {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
		let addr = listener.local_addr().expect("addr");
		drop(listener);
		let api = api_for(format!("http://{addr}/"));

		let err = api.lookup("same").unwrap_err();

		assert!(err.is_transport());
	}

	#[test]
	fn create_posts_json_body_to_base_url() {
		let (base_url, server) = serve_once("201 Created", "{}");
		let api = api_for(base_url);
		let request = AddRequest::new("happy", vec!["joyful".into(), "content".into()]);

		api.create(&request).expect("create");
		let raw = server.join().expect("server");

		assert!(raw.starts_with("POST /api/synonyms/ HTTP/1.1"));
		let body = raw.split("\r\n\r\n").nth(1).expect("body");
		let value: serde_json::Value = serde_json::from_str(body).expect("json body");
		assert_eq!(value["word"], "happy");
		assert_eq!(value["synonyms"], serde_json::json!(["joyful", "content"]));
	}

	#[test]
	fn create_reports_server_error() {
		let (base_url, server) = serve_once("500 Internal Server Error", "{}");
		let api = api_for(base_url);
		let request = AddRequest::new("happy", vec!["joyful".into()]);

		let err = api.create(&request).unwrap_err();
		server.join().expect("server");

		assert!(matches!(err, ApiError::Status { status: 500, .. }));
	}
}
