//! Repository reference parsing
//!
//! Turns whatever the user typed (`https://host/a/b.git`, `git@host:a/b.git`,
//! `a/b`) into a host, an ordered list of path segments, and a clone URL.

use crate::domain::Config;
use crate::error::{GcloneError, Result};
use url::Url;

const REPO_SUFFIX: &str = ".git";

/// How a reference reaches its host, decided purely from its spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Scheme-qualified URL (`https://`, `ssh://`, `git://`, ...).
    Secure,
    /// scp-like `user@host:path`.
    SshStyle,
    /// `owner/repo`, resolved against the default domain.
    Shorthand,
}

impl TransportKind {
    pub fn classify(input: &str) -> Self {
        if input.contains("://") {
            Self::Secure
        } else if input.contains('@') {
            Self::SshStyle
        } else {
            Self::Shorthand
        }
    }

    /// True when the reference can be handed to git verbatim.
    pub fn is_url(self) -> bool {
        !matches!(self, Self::Shorthand)
    }
}

/// Raw user input plus its transport classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoReference {
    raw: String,
    kind: TransportKind,
}

/// `[domain, ...intermediate, repo]`, split into the directory chain and the repo name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegments {
    pub domain: String,
    pub segments: Vec<String>,
}

impl PathSegments {
    pub fn repo_name(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Directories to walk before the repo itself: the domain, then every segment but the last.
    pub fn parent_chain(&self) -> Vec<&str> {
        let intermediate = self.segments.len().saturating_sub(1);
        std::iter::once(self.domain.as_str())
            .chain(self.segments[..intermediate].iter().map(String::as_str))
            .collect()
    }
}

impl RepoReference {
    pub fn parse(input: &str) -> Self {
        let raw = input.trim().to_string();
        let kind = TransportKind::classify(&raw);
        Self { raw, kind }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> TransportKind {
        self.kind
    }

    /// Host the repository lives on.
    pub fn domain(&self, config: &Config) -> Result<String> {
        let host = match self.kind {
            TransportKind::Secure => {
                let url = self.parse_url(&self.raw)?;
                url.host_str().unwrap_or_default().to_string()
            }
            TransportKind::SshStyle => {
                let (_, after_at) = self.raw.split_once('@').unwrap_or_default();
                after_at.split(':').next().unwrap_or_default().to_string()
            }
            TransportKind::Shorthand => config.default_domain.clone(),
        };

        if host.is_empty() {
            return Err(GcloneError::NoHost { input: self.raw.clone() });
        }
        Ok(host)
    }

    /// Organisational segments followed by the repository name, `.git` removed.
    pub fn segments(&self) -> Result<Vec<String>> {
        let raw = self.raw.as_str();

        let mut parts: Vec<String> = match self.kind {
            TransportKind::Secure => {
                let url = self.parse_url(raw)?;
                split_path(url.path())
            }
            TransportKind::SshStyle => {
                let Some((_, path)) = raw.split_once(':') else {
                    return Err(GcloneError::InvalidUrl {
                        input: self.raw.clone(),
                        reason: "expected user@host:path".to_string(),
                    });
                };
                split_path(path)
            }
            TransportKind::Shorthand => split_path(raw),
        };

        // The suffix belongs to the repo name, wherever trailing slashes put it.
        if let Some(last) = parts.last_mut() {
            *last = strip_repo_suffix(last).to_string();
            if last.is_empty() {
                parts.pop();
            }
        }

        if parts.is_empty() {
            return Err(GcloneError::EmptyPath { input: self.raw.clone() });
        }
        if let Some(bad) = parts.iter().find(|p| *p == "." || *p == "..") {
            return Err(GcloneError::InvalidUrl {
                input: self.raw.clone(),
                reason: format!("path segment '{bad}' is not allowed"),
            });
        }
        Ok(parts)
    }

    /// Domain plus segments in one value.
    pub fn path_segments(&self, config: &Config) -> Result<PathSegments> {
        Ok(PathSegments { domain: self.domain(config)?, segments: self.segments()? })
    }

    /// URL handed to `git clone`.
    ///
    /// Full URLs pass through untouched; shorthand becomes
    /// `git@<domain>:<owner>/<repo>.git` or, with `default_https`,
    /// `https://<domain>/<owner>/<repo>.git`.
    pub fn clone_url(&self, config: &Config) -> String {
        if self.kind.is_url() {
            return self.raw.clone();
        }
        let fragment = strip_repo_suffix(self.raw.trim_matches('/'));
        if config.default_https {
            format!("https://{}/{}{}", config.default_domain, fragment, REPO_SUFFIX)
        } else {
            format!("git@{}:{}{}", config.default_domain, fragment, REPO_SUFFIX)
        }
    }

    fn parse_url(&self, text: &str) -> Result<Url> {
        Url::parse(text).map_err(|e| GcloneError::InvalidUrl {
            input: self.raw.clone(),
            reason: e.to_string(),
        })
    }
}

pub fn strip_repo_suffix(input: &str) -> &str {
    input.strip_suffix(REPO_SUFFIX).unwrap_or(input)
}

fn split_path(path: &str) -> Vec<String> {
    path.split('/').filter(|part| !part.is_empty()).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::default().with_default_domain("github.com")
    }

    #[test]
    fn classifies_by_spelling() {
        assert_eq!(TransportKind::classify("https://github.com/a/b"), TransportKind::Secure);
        assert_eq!(TransportKind::classify("ssh://git@host/a/b"), TransportKind::Secure);
        assert_eq!(TransportKind::classify("git@github.com:a/b.git"), TransportKind::SshStyle);
        assert_eq!(TransportKind::classify("a/b"), TransportKind::Shorthand);
        assert_eq!(TransportKind::classify(""), TransportKind::Shorthand);
    }

    #[test]
    fn is_url_means_contains_scheme_or_at() {
        for input in ["https://h/a/b", "git@h:a/b", "me@h", "x://y", "a/b", "plain"] {
            let expected = input.contains("://") || input.contains('@');
            assert_eq!(TransportKind::classify(input).is_url(), expected, "{input}");
        }
    }

    #[test]
    fn https_url_domain_and_segments() {
        let r = RepoReference::parse("https://host.tld/a/b/c.git");
        assert_eq!(r.domain(&config()).unwrap(), "host.tld");
        assert_eq!(r.segments().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn https_url_ignores_extra_slashes() {
        let r = RepoReference::parse("https://host.tld//a/b/");
        assert_eq!(r.segments().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn ssh_scheme_url_uses_host_not_user() {
        let r = RepoReference::parse("ssh://aur@aur.archlinux.org/user/repo.git");
        assert_eq!(r.kind(), TransportKind::Secure);
        assert_eq!(r.domain(&config()).unwrap(), "aur.archlinux.org");
        assert_eq!(r.segments().unwrap(), vec!["user", "repo"]);
    }

    #[test]
    fn scp_style_domain_and_segments() {
        let r = RepoReference::parse("git@host.tld:a/b.git");
        assert_eq!(r.domain(&config()).unwrap(), "host.tld");
        assert_eq!(r.segments().unwrap(), vec!["a", "b"]);
    }

    #[test]
    fn scp_style_without_colon_is_rejected() {
        let r = RepoReference::parse("git@host.tld/a/b");
        assert!(matches!(r.segments(), Err(GcloneError::InvalidUrl { .. })));
    }

    #[test]
    fn shorthand_uses_default_domain() {
        let r = RepoReference::parse("acme/widgets");
        assert_eq!(r.domain(&config()).unwrap(), "github.com");
        assert_eq!(r.segments().unwrap(), vec!["acme", "widgets"]);
        let cfg = config().with_default_domain("gitlab.com");
        assert_eq!(r.domain(&cfg).unwrap(), "gitlab.com");
    }

    #[test]
    fn shorthand_strips_git_suffix() {
        let r = RepoReference::parse("acme/widgets.git");
        assert_eq!(r.segments().unwrap(), vec!["acme", "widgets"]);
    }

    #[test]
    fn suffix_is_stripped_after_trailing_slash() {
        let r = RepoReference::parse("https://gitlab.com/group/tool.git/");
        assert_eq!(r.segments().unwrap(), vec!["group", "tool"]);
        let r = RepoReference::parse("git@host.tld:a/b.git/");
        assert_eq!(r.segments().unwrap(), vec!["a", "b"]);
        let r = RepoReference::parse("acme/widgets.git/");
        assert_eq!(r.segments().unwrap(), vec!["acme", "widgets"]);
    }

    #[test]
    fn suffix_only_in_last_segment() {
        let r = RepoReference::parse("https://host.tld/team.git/repo.git");
        assert_eq!(r.segments().unwrap(), vec!["team.git", "repo"]);
    }

    #[test]
    fn shorthand_keeps_nested_groups_in_order() {
        let r = RepoReference::parse("group/sub/team/repo");
        let segs = r.path_segments(&config()).unwrap();
        assert_eq!(segs.repo_name(), "repo");
        assert_eq!(segs.parent_chain(), vec!["github.com", "group", "sub", "team"]);
    }

    // A bare name has no owner level: the repo sits directly under the domain.
    #[test]
    fn single_segment_shorthand_collapses_to_domain_only() {
        let r = RepoReference::parse("widgets");
        let segs = r.path_segments(&config()).unwrap();
        assert_eq!(segs.segments, vec!["widgets"]);
        assert_eq!(segs.repo_name(), "widgets");
        assert_eq!(segs.parent_chain(), vec!["github.com"]);
    }

    #[test]
    fn empty_and_dot_paths_are_rejected() {
        assert!(matches!(
            RepoReference::parse("https://host.tld/").segments(),
            Err(GcloneError::EmptyPath { .. })
        ));
        assert!(matches!(RepoReference::parse("").segments(), Err(GcloneError::EmptyPath { .. })));
        assert!(matches!(
            RepoReference::parse("../etc").segments(),
            Err(GcloneError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn malformed_https_url_is_an_error() {
        let r = RepoReference::parse("https://");
        assert!(r.domain(&config()).is_err());
    }

    #[test]
    fn shorthand_clone_url_prefers_ssh_by_default() {
        let r = RepoReference::parse("o/r");
        assert_eq!(r.clone_url(&config()), "git@github.com:o/r.git");
    }

    #[test]
    fn shorthand_clone_url_with_https_preference() {
        let r = RepoReference::parse("o/r");
        assert_eq!(r.clone_url(&config().with_default_https(true)), "https://github.com/o/r.git");
    }

    #[test]
    fn shorthand_clone_url_does_not_double_suffix() {
        let r = RepoReference::parse("o/r.git");
        assert_eq!(r.clone_url(&config()), "git@github.com:o/r.git");
    }

    #[test]
    fn full_urls_are_cloned_verbatim() {
        for url in ["https://gitlab.com/a/b.git", "git@gitlab.com:a/b.git", "ssh://u@h/a/b"] {
            assert_eq!(RepoReference::parse(url).clone_url(&config().with_default_https(true)), url);
        }
    }
}
