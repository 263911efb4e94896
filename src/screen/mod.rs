//! The caller-facing verification flow.
//!
//! [`VerificationScreen`] is a headless driver for the three-state
//! verification UI: it owns the flow state ([`VerificationState`]), fires the
//! entitlement check exactly once after a cosmetic delay, and exposes the
//! human-readable strings a rendering layer needs. Actual view rendering is
//! the host's concern.

use std::time::Duration;

use tracing::debug;

use crate::{
    types::{HeaderImage, VerificationState},
    verify::CheckEntitlement,
    Error,
};

/// Default header text shown when the caller supplies none.
const DEFAULT_HEADER_TEXT: &str = "Verification";

/// Caller-supplied presentation options for the verification flow.
///
/// All fields are optional; [`VerificationOptions::default()`] yields a bare
/// flow with no header customization and no dismissal callback.
#[derive(Default)]
pub struct VerificationOptions {
    header_text: Option<String>,
    header_image: Option<HeaderImage>,
    on_dismiss: Option<Box<dyn FnOnce() + Send>>,
}

impl VerificationOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header text shown above the verification status.
    #[must_use]
    pub fn header_text(mut self, text: impl Into<String>) -> Self {
        self.header_text = Some(text.into());
        self
    }

    /// Sets the header image shown above the verification status.
    #[must_use]
    pub fn header_image(mut self, image: HeaderImage) -> Self {
        self.header_image = Some(image);
        self
    }

    /// Sets the dismissal callback.
    ///
    /// Invoked exactly once, by [`VerificationScreen::dismiss`]; the flow
    /// never dismisses itself.
    #[must_use]
    pub fn on_dismiss(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_dismiss = Some(Box::new(callback));
        self
    }
}

impl std::fmt::Debug for VerificationOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationOptions")
            .field("header_text", &self.header_text)
            .field("header_image", &self.header_image)
            .field("has_on_dismiss", &self.on_dismiss.is_some())
            .finish()
    }
}

/// Headless driver for the verification screen.
///
/// The screen starts in [`VerificationState::Loading`] and performs exactly
/// one transition per invocation, triggered by [`run()`](Self::run):
///
/// - `Ok(true)` from the use case → [`VerificationState::Ready`] with
///   `granted: true`;
/// - `Ok(false)` → [`VerificationState::Failed`] carrying
///   `EntitlementMissing` (absence renders as an error on screen, even though
///   the capability reported it as a plain success);
/// - `Err(e)` → [`VerificationState::Failed`] carrying `e` unchanged.
///
/// There is no retry; a failure is terminal for this screen, and the user
/// re-triggers by opening a new one.
///
/// ## Example
///
/// ```rust
/// use carrier_entitlement::{Sdk, screen::VerificationOptions};
///
/// # #[tokio::main(flavor = "current_thread")] async fn main() {
/// let sdk = Sdk::builder().build();
/// let mut screen = sdk.verification(
///     VerificationOptions::new().header_text("My App"),
/// );
///
/// screen.run().await;
/// assert!(!screen.state().is_loading());
/// # }
/// ```
pub struct VerificationScreen {
    use_case: CheckEntitlement,
    delay: Duration,
    state: VerificationState,
    has_run: bool,
    header_text: Option<String>,
    header_image: Option<HeaderImage>,
    on_dismiss: Option<Box<dyn FnOnce() + Send>>,
}

impl VerificationScreen {
    /// Creates a screen in the loading state.
    ///
    /// Callers normally go through [`Sdk::verification`](crate::Sdk::verification)
    /// rather than constructing this directly.
    pub fn new(use_case: CheckEntitlement, delay: Duration, options: VerificationOptions) -> Self {
        Self {
            use_case,
            delay,
            state: VerificationState::Loading,
            has_run: false,
            header_text: options.header_text,
            header_image: options.header_image,
            on_dismiss: options.on_dismiss,
        }
    }

    /// Fires the one-shot deferred check.
    ///
    /// Sleeps the configured delay (pure UX pacing, not a retry or backoff),
    /// invokes the use case once, and performs the single state transition.
    /// Calling `run` again after the flow has left the loading state is a
    /// no-op: the transition happens exactly once per screen.
    pub async fn run(&mut self) {
        if self.has_run {
            return;
        }
        self.has_run = true;

        tokio::time::sleep(self.delay).await;

        self.state = match self.use_case.execute() {
            Ok(true) => {
                debug!("entitlement granted");
                VerificationState::Ready { granted: true }
            }
            Ok(false) => {
                debug!("entitlement missing");
                VerificationState::Failed(Error::entitlement_missing())
            }
            Err(err) => {
                debug!(error = %err, "entitlement check failed");
                VerificationState::Failed(err)
            }
        };
    }

    /// Returns the current flow state.
    pub fn state(&self) -> &VerificationState {
        &self.state
    }

    /// Returns the header text, falling back to the default.
    pub fn header_text(&self) -> &str {
        self.header_text.as_deref().unwrap_or(DEFAULT_HEADER_TEXT)
    }

    /// Returns the caller-supplied header image, if any.
    pub fn header_image(&self) -> Option<&HeaderImage> {
        self.header_image.as_ref()
    }

    /// Returns the human-readable status line for the current state.
    pub fn status_text(&self) -> String {
        match &self.state {
            VerificationState::Loading => "Checking entitlements...".to_string(),
            VerificationState::Ready { granted: true } => {
                "Carrier entitlement detected".to_string()
            }
            VerificationState::Ready { granted: false } => {
                "Carrier entitlement not found".to_string()
            }
            VerificationState::Failed(err) => err.to_string(),
        }
    }

    /// Invokes the caller's dismissal callback.
    ///
    /// The callback runs exactly once; further calls are no-ops. The flow
    /// never invokes it on its own.
    pub fn dismiss(&mut self) {
        if let Some(callback) = self.on_dismiss.take() {
            debug!("verification screen dismissed");
            callback();
        }
    }
}

impl std::fmt::Debug for VerificationScreen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VerificationScreen")
            .field("state", &self.state)
            .field("delay", &self.delay)
            .field("has_run", &self.has_run)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    };

    use super::*;
    use crate::{testing::StubChecker, ErrorKind, Sdk};

    fn sdk_with(stub: StubChecker, delay: Duration) -> Sdk {
        Sdk::builder()
            .checker(Arc::new(stub))
            .check_delay(delay)
            .build()
    }

    #[tokio::test(start_paused = true)]
    async fn test_granted_transitions_to_ready() {
        let sdk = sdk_with(StubChecker::granted(true), Duration::from_millis(500));
        let mut screen = sdk.verification(VerificationOptions::new());

        assert!(screen.state().is_loading());
        screen.run().await;
        assert!(screen.state().is_granted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_granted_maps_to_entitlement_missing() {
        let sdk = sdk_with(StubChecker::granted(false), Duration::from_millis(500));
        let mut screen = sdk.verification(VerificationOptions::new());

        screen.run().await;
        assert_eq!(
            screen.state().error().map(|e| e.kind()),
            Some(ErrorKind::EntitlementMissing)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_carried_unchanged() {
        let stub = StubChecker::failing(Error::check_failed(std::io::Error::other(
            "subsystem unavailable",
        )));
        let sdk = sdk_with(stub, Duration::from_millis(500));
        let mut screen = sdk.verification(VerificationOptions::new());

        screen.run().await;
        let err = screen.state().error().unwrap();
        assert_eq!(err.kind(), ErrorKind::CheckFailed);
        assert!(err.to_string().contains("subsystem unavailable"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_check_fires_after_delay_exactly_once() {
        let stub = StubChecker::granted(true);
        let sdk = sdk_with(stub.clone(), Duration::from_millis(500));
        let mut screen = sdk.verification(VerificationOptions::new());

        let started = tokio::time::Instant::now();
        screen.run().await;
        assert!(started.elapsed() >= Duration::from_millis(500));
        assert_eq!(stub.call_count(), 1);

        // A second run is a no-op: one transition per screen.
        screen.run().await;
        assert_eq!(stub.call_count(), 1);
    }

    #[test]
    fn test_dismiss_runs_callback_exactly_once() {
        let dismissals = Arc::new(AtomicUsize::new(0));
        let counter = dismissals.clone();

        let sdk = sdk_with(StubChecker::granted(true), Duration::from_millis(1));
        let mut screen = sdk.verification(
            VerificationOptions::new().on_dismiss(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );

        screen.dismiss();
        screen.dismiss();
        assert_eq!(dismissals.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_run_under_blocking_executor() {
        let sdk = sdk_with(StubChecker::granted(true), Duration::from_millis(1));
        let mut screen = sdk.verification(VerificationOptions::new());

        tokio_test::block_on(screen.run());
        assert!(screen.state().is_granted());
    }

    #[tokio::test(start_paused = true)]
    async fn test_status_text_per_state() {
        let sdk = sdk_with(StubChecker::granted(true), Duration::from_millis(1));
        let mut screen = sdk.verification(VerificationOptions::new());
        assert!(screen.status_text().contains("Checking"));

        screen.run().await;
        assert!(screen.status_text().contains("detected"));
    }

    #[test]
    fn test_header_defaults() {
        let sdk = Sdk::builder().build();
        let screen = sdk.verification(VerificationOptions::new());
        assert_eq!(screen.header_text(), "Verification");
        assert!(screen.header_image().is_none());
    }

    #[test]
    fn test_header_customization() {
        let sdk = Sdk::builder().build();
        let screen = sdk.verification(
            VerificationOptions::new()
                .header_text("My App")
                .header_image(HeaderImage::new(vec![1, 2, 3])),
        );
        assert_eq!(screen.header_text(), "My App");
        assert_eq!(screen.header_image().map(|i| i.len()), Some(3));
    }
}
