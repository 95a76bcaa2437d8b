//! Headless Chromium session for rendered extraction

use crate::ScrapeError;
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::page::Page;
use futures::StreamExt;
use std::time::Duration;
use tokio::task::JoinHandle;

/// A scoped headless-browser session with a single page
///
/// Acquired at the start of a rendered extraction attempt and released with
/// [`RenderSession::close`] unconditionally at the end, including on error;
/// leaked browser processes accumulate fast on ephemeral runtimes.
pub struct RenderSession {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
}

impl RenderSession {
    /// Launches a headless Chromium instance and opens a blank page
    ///
    /// The launch arguments match what the hosting environments tolerate:
    /// no sandbox, no GPU, single process.
    pub async fn launch(user_agent: &str) -> Result<Self, ScrapeError> {
        let config = BrowserConfig::builder()
            .arg("--headless=new")
            .arg("--no-sandbox")
            .arg("--disable-setuid-sandbox")
            .arg("--disable-dev-shm-usage")
            .arg("--disable-gpu")
            .arg("--no-zygote")
            .build()
            .map_err(|e| ScrapeError::Render(format!("failed to build browser config: {}", e)))?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| ScrapeError::Render(format!("failed to launch browser: {}", e)))?;

        // Drain CDP events for the life of the browser
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                let _ = event;
            }
        });

        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| ScrapeError::Render(format!("failed to open page: {}", e)))?;

        if let Err(e) = page.set_user_agent(user_agent).await {
            tracing::debug!("failed to set rendered user agent: {}", e);
        }

        Ok(RenderSession {
            browser,
            page,
            handler_task,
        })
    }

    /// Navigates the session page and waits for the load to settle
    pub async fn navigate(&self, url: &str, timeout_secs: u64) -> Result<(), ScrapeError> {
        let result = tokio::time::timeout(
            Duration::from_secs(timeout_secs),
            self.page.goto(url),
        )
        .await;

        match result {
            Ok(Ok(_)) => {
                let _ = self.page.wait_for_navigation().await;
                Ok(())
            }
            Ok(Err(e)) => Err(ScrapeError::Render(format!(
                "navigation to {} failed: {}",
                url, e
            ))),
            Err(_) => Err(ScrapeError::Render(format!(
                "navigation to {} timed out after {}s",
                url, timeout_secs
            ))),
        }
    }

    /// Returns the `src` of the naver `#mainFrame` element, if present
    pub async fn embedded_frame_src(&self) -> Result<Option<String>, ScrapeError> {
        let result = self
            .page
            .evaluate(
                "(() => { const f = document.querySelector('#mainFrame'); \
                 return f ? f.src : null; })()",
            )
            .await
            .map_err(|e| ScrapeError::Render(format!("frame lookup failed: {}", e)))?;

        result
            .into_value()
            .map_err(|e| ScrapeError::Render(format!("frame lookup returned no value: {}", e)))
    }

    /// Serializes the rendered document for the extraction engine
    pub async fn document_html(&self) -> Result<String, ScrapeError> {
        let result = self
            .page
            .evaluate("document.documentElement.outerHTML")
            .await
            .map_err(|e| ScrapeError::Render(format!("failed to read rendered DOM: {}", e)))?;

        let html: String = result
            .into_value()
            .map_err(|e| ScrapeError::Render(format!("rendered DOM was not a string: {}", e)))?;

        if html.trim().is_empty() {
            return Err(ScrapeError::Structure(
                "rendered page produced no markup".to_string(),
            ));
        }

        Ok(html)
    }

    /// Tears the session down: page, browser process, and event task
    pub async fn close(mut self) {
        let _ = self.page.close().await;
        let _ = self.browser.close().await;
        let _ = self.browser.wait().await;
        self.handler_task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires Chromium to be installed
    async fn test_launch_navigate_and_read_dom() {
        let session = RenderSession::launch("postlens-test").await.unwrap();

        session
            .navigate("data:text/html,<h1>Hello</h1><p>World</p>", 10)
            .await
            .unwrap();

        let html = session.document_html().await.unwrap();
        assert!(html.contains("<h1>Hello</h1>"));

        let frame = session.embedded_frame_src().await.unwrap();
        assert_eq!(frame, None);

        session.close().await;
    }
}
