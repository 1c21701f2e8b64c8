use crate::error::Error;

/// Copy `s` to the system clipboard.
///
/// Thin wrapper around `arboard`. Headless machines and CI runners often have
/// no clipboard; the CLI only warns when this fails.
pub fn copy_to_clipboard(s: &str) -> Result<(), Error> {
    let mut ctx = arboard::Clipboard::new().map_err(|source| Error::Clipboard {
        action: "init",
        source,
    })?;
    ctx.set_text(s.to_owned()).map_err(|source| Error::Clipboard {
        action: "set",
        source,
    })
}
