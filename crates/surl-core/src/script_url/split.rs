//! Derivation of script path, base path, and path info.
//!
//! All three results are plain slices of the stored strings, recomputed on
//! every call. Offsets are byte offsets; when the script path diverges
//! from the URL path they can point past the end or into the middle of a
//! multibyte sequence, so the slice helpers clamp to the path length and
//! back off to a character boundary. An offset past the end yields the
//! empty suffix, never an error.

use super::ScriptUrl;

impl ScriptUrl {
    /// Returns the script path, or the whole URL path when none is set.
    ///
    /// With no explicit script path the entire path counts as the script,
    /// which is the behavior of a deployment without URL rewriting: no
    /// path info, and the base path is the last directory of the path.
    pub fn script_path(&self) -> &str {
        if self.script_path.is_empty() {
            self.url.path()
        } else {
            &self.script_path
        }
    }

    /// Returns the base path: the URL path up to and including the last
    /// `/` of the script path, or `""` when the script path contains no
    /// `/` at all (possible for opaque paths such as `mailto:` URLs).
    ///
    /// The `/` is located in the value of `script_path()` but the slice is
    /// taken from the URL path. When the two diverge the result is still a
    /// prefix of the real request path, cut at the position the script
    /// path put its last `/`.
    pub fn base_path(&self) -> &str {
        match self.script_path().rfind('/') {
            Some(pos) => prefix_to(self.url.path(), pos + 1),
            None => "",
        }
    }

    /// Returns the path info: the remainder of the URL path after the
    /// script path. Empty when the script path covers the whole path or
    /// overshoots it.
    pub fn path_info(&self) -> &str {
        suffix_from(self.url.path(), self.script_path().len())
    }

    /// True when the value of `script_path()` is a prefix of the URL
    /// path, i.e. `base_path` and `path_info` are meaningful. This is a
    /// probe only; nothing in this type ever requires it to hold.
    pub fn script_path_is_prefix(&self) -> bool {
        self.url.path().starts_with(self.script_path())
    }
}

/// `s[..end]` with `end` clamped to the length and moved back to the
/// nearest character boundary.
fn prefix_to(s: &str, end: usize) -> &str {
    let mut end = end.min(s.len());
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// `s[start..]` with `start` clamped to the length and moved back to the
/// nearest character boundary.
fn suffix_from(s: &str, start: usize) -> &str {
    let mut start = start.min(s.len());
    while start > 0 && !s.is_char_boundary(start) {
        start -= 1;
    }
    &s[start..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script_url(url: &str, script_path: &str) -> ScriptUrl {
        let mut u = ScriptUrl::parse(url).unwrap();
        u.set_script_path(script_path);
        u
    }

    #[test]
    fn splits_around_an_entry_point_script() {
        let u = script_url(
            "https://example.org/admin/script.php/pathinfo/",
            "/admin/script.php",
        );
        assert_eq!(u.script_path(), "/admin/script.php");
        assert_eq!(u.base_path(), "/admin/");
        assert_eq!(u.path_info(), "/pathinfo/");
    }

    #[test]
    fn directory_index_consumes_the_whole_path() {
        let u = script_url("https://example.org/admin/", "/admin/");
        assert_eq!(u.script_path(), "/admin/");
        assert_eq!(u.base_path(), "/admin/");
        assert_eq!(u.path_info(), "");
    }

    #[test]
    fn unset_script_path_roots_the_base_at_slash() {
        let u = ScriptUrl::parse("https://example.org/foo").unwrap();
        assert_eq!(u.script_path(), "/foo");
        // the leading slash is still a slash
        assert_eq!(u.base_path(), "/");
        assert_eq!(u.path_info(), "");
    }

    #[test]
    fn script_path_longer_than_path_yields_empty_info() {
        let u = script_url("https://example.org/a", "/a/b");
        assert_eq!(u.path_info(), "");
        // base slice end (3) clamps to the path length
        assert_eq!(u.base_path(), "/a");
        assert!(!u.script_path_is_prefix());
    }

    #[test]
    fn prefix_script_paths_reassemble_the_path() {
        let cases = [
            ("/admin/script.php/pathinfo/", "/admin/script.php"),
            ("/index.php/a/b", "/index.php"),
            ("/app/", "/app/"),
            ("/deep/nested/run.cgi/x", "/deep/nested/run.cgi"),
        ];
        for (path, script) in cases {
            let u = script_url(&format!("https://example.org{path}"), script);
            assert!(u.script_path_is_prefix(), "case {path}");
            assert_eq!(u.script_path(), script);
            assert_eq!(u.path_info(), &path[script.len()..]);
            assert_eq!(format!("{}{}", u.script_path(), u.path_info()), path);
            assert!(u.base_path().ends_with('/'), "case {path}");
        }
    }

    #[test]
    fn query_and_fragment_stay_out_of_the_split() {
        let u = script_url("https://example.org/index.php/info?x=1#f", "/index.php");
        assert_eq!(u.path_info(), "/info");
        assert_eq!(u.base_path(), "/");
    }

    #[test]
    fn opaque_path_without_slash_has_no_base() {
        let u = ScriptUrl::parse("mailto:ops@example.org").unwrap();
        assert_eq!(u.script_path(), "ops@example.org");
        assert_eq!(u.base_path(), "");
        assert_eq!(u.path_info(), "");
    }

    #[test]
    fn divergent_script_path_still_slices_the_url_path() {
        // last '/' of the script path sits at byte 12; the slice is taken
        // from the URL path, not from the script path
        let u = script_url("https://example.org/cms/index.php", "/admin/panel/run.php");
        assert_eq!(u.base_path(), "/cms/index.ph");
        assert!(!u.script_path_is_prefix());
    }

    #[test]
    fn accessors_are_idempotent() {
        let u = script_url("https://example.org/a/b.php/c", "/a/b.php");
        assert_eq!(u.script_path(), u.script_path());
        assert_eq!(u.base_path(), u.base_path());
        assert_eq!(u.path_info(), u.path_info());
    }

    #[test]
    fn slice_helpers_clamp_and_respect_char_boundaries() {
        assert_eq!(prefix_to("abc", 10), "abc");
        assert_eq!(prefix_to("abc", 0), "");
        // byte 2 is the middle of the two-byte 'é'
        assert_eq!(prefix_to("héx", 2), "h");
        assert_eq!(suffix_from("héx", 2), "éx");
        assert_eq!(suffix_from("abc", 10), "");
        assert_eq!(suffix_from("abc", 3), "");
    }
}
