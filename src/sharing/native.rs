//! Native share dialog

use std::{
    env, fmt,
    path::{Path, PathBuf},
    process::Command,
};

use tracing::{info, warn};

use crate::sharing::{ShareDialog, ShareError, ShareOutcome, SharePayload, Sharer};

/// Shares through the platform's share dialog.
pub struct NativeShare {
    dialog: Box<dyn ShareDialog>,
}

impl NativeShare {
    /// Share through `dialog`.
    pub fn new(dialog: Box<dyn ShareDialog>) -> Self {
        Self { dialog }
    }
}

impl fmt::Debug for NativeShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeShare").finish_non_exhaustive()
    }
}

impl Sharer for NativeShare {
    fn share(&mut self, payload: &SharePayload) -> Result<ShareOutcome, ShareError> {
        if let Err(error) = self.dialog.present(payload) {
            warn!(%error, url = %payload.url, "native share failed");

            return Err(error);
        }

        info!(url = %payload.url, "promo shared");

        Ok(ShareOutcome::Shared)
    }

    fn name(&self) -> &'static str {
        "native"
    }
}

/// A share dialog implemented by an external program, invoked as
/// `<program> <title> <text> <url>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandShareDialog {
    program: PathBuf,
}

impl CommandShareDialog {
    /// Use `program` without checking that it exists.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Use `program` if it can be found, either as a path or on `PATH`.
    pub fn detect(program: &str) -> Option<Self> {
        let candidate = Path::new(program);

        if candidate.components().count() > 1 {
            return candidate.is_file().then(|| Self::new(candidate));
        }

        let path = env::var_os("PATH")?;

        env::split_paths(&path)
            .map(|dir| dir.join(program))
            .find(|full| full.is_file())
            .map(Self::new)
    }

    /// Resolved program path.
    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl ShareDialog for CommandShareDialog {
    fn present(&mut self, payload: &SharePayload) -> Result<(), ShareError> {
        let status = Command::new(&self.program)
            .arg(&payload.title)
            .arg(&payload.text)
            .arg(&payload.url)
            .status()
            .map_err(|error| ShareError::Dialog(error.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(ShareError::Dialog(format!(
                "{} exited with {status}",
                self.program.display()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::sharing::MockShareDialog;

    use super::*;

    fn payload() -> SharePayload {
        SharePayload {
            title: "Promo code Amazon: Livraison gratuite".to_string(),
            text: "I found this promo code on PromoSwap".to_string(),
            url: "https://promoswap.fr/promo/3".to_string(),
        }
    }

    #[test]
    fn dialog_failure_does_not_fall_back() {
        let mut dialog = MockShareDialog::new();
        dialog
            .expect_present()
            .times(1)
            .returning(|_| Err(ShareError::Dialog("dismissed".to_string())));

        let mut sharer = NativeShare::new(Box::new(dialog));

        assert_eq!(
            sharer.share(&payload()),
            Err(ShareError::Dialog("dismissed".to_string()))
        );
    }

    #[test]
    fn detect_rejects_missing_program() {
        assert!(CommandShareDialog::detect("promoswap-definitely-missing-share-tool").is_none());
        assert!(CommandShareDialog::detect("/nonexistent/dir/share").is_none());
    }

    #[cfg(unix)]
    #[test]
    fn command_dialog_reports_exit_status() {
        let mut ok = CommandShareDialog::new("true");
        let mut failing = CommandShareDialog::new("false");

        assert_eq!(ok.present(&payload()), Ok(()));
        assert!(matches!(
            failing.present(&payload()),
            Err(ShareError::Dialog(_))
        ));
    }

    #[test]
    fn command_dialog_reports_spawn_failure() {
        let mut dialog = CommandShareDialog::new("/nonexistent/dir/share");

        assert!(matches!(
            dialog.present(&payload()),
            Err(ShareError::Dialog(_))
        ));
    }
}
