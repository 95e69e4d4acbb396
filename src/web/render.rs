//! HTML rendering for the package table
//!
//! Pure functions of (snapshot, last-updated string); no state of their own.

use chrono::{DateTime, Duration, Utc};

use crate::registry::types::PackageRecord;

/// Humanizes the time elapsed since `last_updated`: "just now" under a
/// minute, then whole minutes, hours, and days. "never" before the first
/// refresh.
pub fn time_ago(last_updated: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(then) = last_updated else {
        return "never".to_string();
    };

    let elapsed = now - then;
    if elapsed < Duration::minutes(1) {
        "just now".to_string()
    } else if elapsed < Duration::hours(1) {
        plural(elapsed.num_minutes(), "minute")
    } else if elapsed < Duration::days(1) {
        plural(elapsed.num_hours(), "hour")
    } else {
        plural(elapsed.num_days(), "day")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Renders the dashboard page for the given snapshot.
pub fn render_page(packages: &[PackageRecord], last_updated: &str) -> String {
    let mut rows = String::new();
    let mut deps = serde_json::Map::new();
    for pkg in packages {
        let name = escape(&pkg.name);
        let version = escape(&pkg.version);
        let author = escape(&pkg.author);
        rows.push_str(&format!(
            "<tr><td>{name}</td><td>{version}</td><td>{author}</td>\
             <td><button onclick=\"copyCmd('npm install {name}@{version}')\">Copy</button></td></tr>\n"
        ));
        deps.insert(
            pkg.name.clone(),
            serde_json::Value::String(pkg.version.clone()),
        );
    }
    let deps_json =
        serde_json::to_string_pretty(&serde_json::Value::Object(deps)).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<style>
*{{margin:0;padding:0;box-sizing:border-box}}
body{{font:14px -apple-system,sans-serif;background:#f8f9fa;padding:20px}}
.header{{display:flex;justify-content:space-between;align-items:center;margin-bottom:20px}}
h1{{color:#333;margin:0}}
button{{background:#007bff;color:white;border:none;padding:8px 16px;border-radius:4px;cursor:pointer}}
button:hover{{background:#0056b3}}
table{{width:100%;background:white;border-radius:8px;overflow:hidden;box-shadow:0 2px 8px rgba(0,0,0,0.1)}}
th,td{{padding:12px;text-align:left;border-bottom:1px solid #eee}}
th{{background:#f8f9fa;font-weight:600;color:#495057}}
tr:hover{{background:#f8f9fa}}
td button{{background:#28a745;padding:4px 8px;font-size:12px}}
td button:hover{{background:#1e7e34}}
</style>
</head>
<body>
<div class="header">
<h1>&#128230; pkgspy</h1>
<button onclick="copyAllDeps()">Copy All Dependencies</button>
</div>
<p style="font-size:12px;color:#666;margin:0">updated {last_updated}</p>
<table>
<tr><th>Package</th><th>Version</th><th>Author</th><th>Install</th></tr>
{rows}</table>
</body>
<script>
function copyCmd(cmd){{navigator.clipboard.writeText(cmd)}}
function copyAllDeps(){{navigator.clipboard.writeText({deps_json:?})}}
</script>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn record(name: &str, version: &str, author: &str) -> PackageRecord {
        PackageRecord {
            name: name.to_string(),
            version: version.to_string(),
            author: author.to_string(),
        }
    }

    #[rstest]
    #[case(Duration::seconds(0), "just now")]
    #[case(Duration::seconds(59), "just now")]
    #[case(Duration::minutes(1), "1 minute ago")]
    #[case(Duration::minutes(59), "59 minutes ago")]
    #[case(Duration::hours(1), "1 hour ago")]
    #[case(Duration::hours(23), "23 hours ago")]
    #[case(Duration::days(1), "1 day ago")]
    #[case(Duration::days(3), "3 days ago")]
    fn time_ago_humanizes_elapsed_time(#[case] elapsed: Duration, #[case] expected: &str) {
        let now = Utc::now();
        assert_eq!(time_ago(Some(now - elapsed), now), expected);
    }

    #[test]
    fn time_ago_reports_never_before_first_refresh() {
        assert_eq!(time_ago(None, Utc::now()), "never");
    }

    #[test]
    fn render_page_lists_packages_in_order() {
        let page = render_page(
            &[
                record("expr-eval", "2.0.2", "Matthew Crumley"),
                record("sweetalert2", "11.10.1", ""),
            ],
            "just now",
        );

        let expr = page.find("expr-eval").unwrap();
        let sweet = page.find("sweetalert2").unwrap();
        assert!(expr < sweet);
        assert!(page.contains("2.0.2"));
        assert!(page.contains("Matthew Crumley"));
        assert!(page.contains("updated just now"));
    }

    #[test]
    fn render_page_escapes_html_in_registry_data() {
        let page = render_page(&[record("pkg", "1.0.0", "<b>evil</b>")], "just now");

        assert!(!page.contains("<b>evil</b>"));
        assert!(page.contains("&lt;b&gt;evil&lt;/b&gt;"));
    }

    #[test]
    fn render_page_handles_empty_snapshot() {
        let page = render_page(&[], "never");

        assert!(page.contains("updated never"));
        assert!(page.contains("<table>"));
    }
}
