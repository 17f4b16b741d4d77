//! Quarto shortcode rendering.

/// Render a quarto shortcode: `{{< name arg key=value >}}`.
///
/// Positional arguments come first, followed by key-value options, all
/// space separated.
///
/// # Example
///
/// ```
/// use qref_blocks::shortcode;
///
/// let code = shortcode("embed", &["examples/geom_bar.ipynb"], &[("echo", "true")]);
/// assert_eq!(code, "{{< embed examples/geom_bar.ipynb echo=true >}}");
/// ```
#[must_use]
pub fn shortcode(name: &str, args: &[&str], options: &[(&str, &str)]) -> String {
    let mut parts = vec![name.to_owned()];
    parts.extend(args.iter().map(|a| (*a).to_owned()));
    parts.extend(options.iter().map(|(k, v)| format!("{k}={v}")));
    format!("{{{{< {} >}}}}", parts.join(" "))
}
