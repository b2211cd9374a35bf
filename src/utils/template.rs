/// Replaces `{key}` placeholders in `tpl`. Substitution only, no logic.
pub fn fill_template(tpl: &str, pairs: &[(&str, &str)]) -> String {
    let mut out = tpl.to_string();
    for (k, v) in pairs {
        let needle = format!("{{{}}}", k);
        out = out.replace(&needle, v);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence_and_leaves_json_braces() {
        let tpl = "Track {track}, again {track}. Shape: {\"level\": \"{level}\"}";
        let out = fill_template(tpl, &[("track", "career"), ("level", "hard")]);
        assert_eq!(out, "Track career, again career. Shape: {\"level\": \"hard\"}");
    }
}
