//! Naver post identity resolution
//!
//! A naver blog post is addressable three ways: the desktop page (which nests
//! the real content in an embedded frame), the frame document itself, and a
//! lightweight mobile page. Resolving the `{blog_id, log_no}` pair from
//! either the original URL or the frame URL lets the pipeline jump straight
//! to the mobile page, bypassing the two-hop frame navigation.

use url::Url;

/// Identity of a single naver blog post
///
/// Both fields are required together; an identity is never partially
/// resolved. Computed once per extraction attempt and discarded after the
/// mobile URL is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostIdentity {
    pub blog_id: String,
    pub log_no: String,
}

impl PostIdentity {
    /// Builds the mobile post URL for this identity
    pub fn mobile_url(&self, mobile_base: &str) -> String {
        format!(
            "{}/{}/{}",
            mobile_base.trim_end_matches('/'),
            self.blog_id,
            self.log_no
        )
    }
}

/// Resolves a naver post identity from candidate URLs
///
/// Candidates are examined in order: the original URL first, then the
/// embedded-frame URL. For each candidate two matching strategies are tried:
///
/// 1. Path pattern `blog.naver.com/{blog_id}/{log_no}` where log_no is a run
///    of at least 6 ASCII digits
/// 2. Query parameters `blogId` and `logNo` (both required)
///
/// Relative candidates (a frame `src` attribute) resolve against
/// `https://blog.naver.com`. Returns `None` when no candidate matches either
/// strategy.
pub fn resolve(original_url: &str, frame_url: Option<&str>) -> Option<PostIdentity> {
    let base = Url::parse("https://blog.naver.com").ok()?;

    let mut candidates = vec![original_url];
    if let Some(frame) = frame_url {
        candidates.push(frame);
    }

    for candidate in candidates {
        let url = match base.join(candidate) {
            Ok(u) => u,
            Err(_) => continue,
        };

        if let Some(identity) = match_path_form(&url) {
            return Some(identity);
        }
        if let Some(identity) = match_query_form(&url) {
            return Some(identity);
        }
    }

    None
}

/// Matches the path form: `https://blog.naver.com/{blog_id}/{log_no}`
fn match_path_form(url: &Url) -> Option<PostIdentity> {
    let host = url.host_str()?;
    if !host.ends_with("blog.naver.com") {
        return None;
    }

    let mut segments = url.path_segments()?.filter(|s| !s.is_empty());
    let blog_id = segments.next()?;
    let second = segments.next()?;

    // log_no is the leading digit run of the second segment
    let log_no: String = second.chars().take_while(|c| c.is_ascii_digit()).collect();
    if log_no.len() < 6 {
        return None;
    }

    Some(PostIdentity {
        blog_id: blog_id.to_string(),
        log_no,
    })
}

/// Matches the query form: `PostView.naver?blogId=...&logNo=...`
fn match_query_form(url: &Url) -> Option<PostIdentity> {
    let mut blog_id = None;
    let mut log_no = None;

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "blogId" if !value.is_empty() => blog_id = Some(value.into_owned()),
            "logNo" if !value.is_empty() => log_no = Some(value.into_owned()),
            _ => {}
        }
    }

    Some(PostIdentity {
        blog_id: blog_id?,
        log_no: log_no?,
    })
}
