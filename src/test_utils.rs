//! Shared test utilities for multisearch
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use std::io::{BufRead, BufReader, Write};
    use std::net::{TcpListener, TcpStream};
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::search::PanelSearchController;

    /// Helper to run async tests with a tokio runtime
    pub fn run_async<F: std::future::Future>(f: F) -> F::Output {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("Failed to create tokio runtime");
        rt.block_on(f)
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Poll a controller until it leaves Loading or `timeout` passes
    pub fn wait_until_settled(controller: &mut PanelSearchController, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        loop {
            controller.poll_response_channel();
            if !controller.state().is_loading() {
                return true;
            }
            if Instant::now() >= deadline {
                return false;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
    }

    /// Canned answer from the mock video API
    #[derive(Debug, Clone)]
    pub struct MockResponse {
        pub status: u16,
        pub body: String,
        pub delay: Duration,
    }

    impl MockResponse {
        pub fn ok(body: String) -> Self {
            Self {
                status: 200,
                body,
                delay: Duration::ZERO,
            }
        }

        pub fn status(status: u16) -> Self {
            Self {
                status,
                body: r#"{"error":{"message":"mock failure"}}"#.to_string(),
                delay: Duration::ZERO,
            }
        }

        pub fn delayed(mut self, delay: Duration) -> Self {
            self.delay = delay;
            self
        }
    }

    /// Start a local HTTP server that answers each request via `handler`
    ///
    /// The handler receives the request target (path and query string).
    /// Returns the base URL to use as the video `api_url`.
    pub fn spawn_mock_api<F>(handler: F) -> String
    where
        F: Fn(&str) -> MockResponse + Send + Sync + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock api");
        let addr = listener.local_addr().expect("mock api address");
        let handler = Arc::new(handler);

        std::thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let handler = Arc::clone(&handler);
                std::thread::spawn(move || handle_connection(stream, handler.as_ref()));
            }
        });

        format!("http://{}/v3", addr)
    }

    fn handle_connection(stream: TcpStream, handler: &dyn Fn(&str) -> MockResponse) {
        let mut reader = BufReader::new(match stream.try_clone() {
            Ok(s) => s,
            Err(_) => return,
        });

        let mut request_line = String::new();
        if reader.read_line(&mut request_line).is_err() {
            return;
        }
        loop {
            let mut header = String::new();
            match reader.read_line(&mut header) {
                Ok(0) => break,
                Ok(_) if header == "\r\n" || header == "\n" => break,
                Ok(_) => continue,
                Err(_) => return,
            }
        }

        let target = request_line.split_whitespace().nth(1).unwrap_or("/");
        let response = handler(target);
        std::thread::sleep(response.delay);

        let mut stream = stream;
        let _ = write!(
            stream,
            "HTTP/1.1 {} Mock\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            response.status,
            response.body.len(),
            response.body
        );
        let _ = stream.flush();
    }

    /// Extract a decoded query parameter from a request target
    pub fn query_param(target: &str, name: &str) -> Option<String> {
        let url = reqwest::Url::parse(&format!("http://localhost{}", target)).ok()?;
        url.query_pairs()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.into_owned())
    }

    /// JSON for one search item in the video API format
    pub fn video_item_json(video_id: &str, title: &str) -> String {
        format!(
            r#"{{
                "kind": "youtube#searchResult",
                "id": {{"kind": "youtube#video", "videoId": "{id}"}},
                "snippet": {{
                    "title": "{title}",
                    "description": "About {title}",
                    "thumbnails": {{"default": {{"url": "https://i.ytimg.com/vi/{id}/default.jpg"}}}},
                    "channelTitle": "Channel {id}",
                    "publishedAt": "2024-01-0{n}T00:00:00Z"
                }}
            }}"#,
            id = video_id,
            title = title,
            n = 1 + (video_id.len() % 9)
        )
    }

    /// Full search response body for `(video_id, title)` pairs
    pub fn search_body(videos: &[(&str, &str)]) -> String {
        let items: Vec<String> = videos
            .iter()
            .map(|(id, title)| video_item_json(id, title))
            .collect();
        format!(r#"{{"kind": "youtube#searchListResponse", "items": [{}]}}"#, items.join(","))
    }
}
