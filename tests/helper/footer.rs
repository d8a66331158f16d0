//! Footer test utilities

use mockito::{Mock, Server, ServerGuard};

use footer_version::footer::element::Node;
use footer_version::footer::target::FooterTarget;

/// Start a server answering `GET /VERSION.txt` with `status` and `body`
pub async fn marker_server(status: usize, body: &str) -> (ServerGuard, Mock) {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/VERSION.txt")
        .match_header("cache-control", "no-store")
        .with_status(status)
        .with_header("content-type", "text/plain")
        .with_body(body)
        .create_async()
        .await;

    (server, mock)
}

/// Footer target that records every node it is given
#[derive(Default)]
pub struct RecordingTarget {
    pub has_anchor: bool,
    pub has_container: bool,
    pub after_anchor: Vec<Node>,
    pub in_container: Vec<Node>,
}

impl RecordingTarget {
    pub fn with_anchor() -> Self {
        Self {
            has_anchor: true,
            ..Default::default()
        }
    }

    pub fn with_container() -> Self {
        Self {
            has_container: true,
            ..Default::default()
        }
    }
}

impl FooterTarget for RecordingTarget {
    fn insert_after_anchor(&mut self, node: Node) -> Result<(), Node> {
        if !self.has_anchor {
            return Err(node);
        }
        self.after_anchor.push(node);
        Ok(())
    }

    fn append_to_container(&mut self, node: Node) -> Result<(), Node> {
        if !self.has_container {
            return Err(node);
        }
        self.in_container.push(node);
        Ok(())
    }
}
