//! Integration tests for the bootstrap flow.
//!
//! These run the bootstrapper against the real file-backed OAuth helper
//! and verify the startup flags, the login forwarding path, and the
//! failure semantics end to end.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use liftoff_application::Bootstrapper;
use liftoff_application::ports::{
    AppHost, AppPorts, Clock, HostError, MessagePort, MountPoint, OAUTH_SUCCESS_PORT,
    SetupError, SetupRoutine,
};
use liftoff_domain::{AuthResponse, Flags, Profile, Session};
use liftoff_infrastructure::{ChannelAppHost, FileSessionHelper, SystemClock};
use pretty_assertions::assert_eq;
use tempfile::tempdir;
use tokio::sync::mpsc;

/// Host that hands the flags and the port's receiving end back to the test.
#[derive(Clone, Default)]
struct TestHost {
    seen: Arc<Mutex<Option<(Flags, mpsc::UnboundedReceiver<String>)>>>,
}

impl TestHost {
    fn take(&self) -> (Flags, mpsc::UnboundedReceiver<String>) {
        self.seen.lock().unwrap().take().unwrap()
    }
}

#[async_trait]
impl AppHost for TestHost {
    async fn embed(&self, _mount: &MountPoint, flags: Flags) -> Result<AppPorts, HostError> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.seen.lock().unwrap() = Some((flags, rx));
        Ok(AppPorts {
            oauth_success: MessagePort::new(OAUTH_SUCCESS_PORT, tx),
        })
    }
}

struct NoopSetup;

impl SetupRoutine for NoopSetup {
    fn register(&self) -> Result<(), SetupError> {
        Ok(())
    }
}

fn far_future() -> i64 {
    SystemClock::new().now().timestamp() + 3_600
}

fn helper_in(dir: &tempfile::TempDir) -> Arc<FileSessionHelper> {
    Arc::new(FileSessionHelper::new(dir.path().join("sessions.json")))
}

#[tokio::test]
async fn test_flags_carry_token_from_valid_stored_session() {
    let dir = tempdir().unwrap();
    let helper = helper_in(&dir);
    helper
        .store_session("github", Session::new("abc", far_future()))
        .await
        .unwrap();

    let host = TestHost::default();
    let boot = Bootstrapper::new(
        Arc::clone(&helper),
        host.clone(),
        SystemClock::new(),
        NoopSetup,
        Profile::Development,
    );
    assert_eq!(boot.existing_access_token().await, Some("abc".to_string()));

    let handle = boot.initialize().await.unwrap();
    let (flags, _rx) = host.take();
    assert_eq!(flags, Flags::new(Some("abc".to_string())));
    handle.shutdown();
}

#[tokio::test]
async fn test_flags_are_anonymous_for_expired_session() {
    let dir = tempdir().unwrap();
    let helper = helper_in(&dir);
    let past = SystemClock::new().now().timestamp() - 1;
    helper
        .store_session("github", Session::new("abc", past))
        .await
        .unwrap();

    let host = TestHost::default();
    let handle = Bootstrapper::new(
        Arc::clone(&helper),
        host.clone(),
        SystemClock::new(),
        NoopSetup,
        Profile::Development,
    )
    .initialize()
    .await
    .unwrap();

    let (flags, _rx) = host.take();
    assert_eq!(flags, Flags::anonymous());
    handle.shutdown();
}

#[tokio::test]
async fn test_flags_are_anonymous_for_tokenless_session() {
    let dir = tempdir().unwrap();
    let helper = helper_in(&dir);
    // Stored record without an access_token field.
    tokio::fs::write(
        helper.path(),
        format!("{{\"github\": {{\"expires\": {}}}}}", far_future()),
    )
    .await
    .unwrap();

    let host = TestHost::default();
    let boot = Bootstrapper::new(
        Arc::clone(&helper),
        host.clone(),
        SystemClock::new(),
        NoopSetup,
        Profile::Development,
    );
    assert_eq!(boot.existing_access_token().await, None);
}

#[tokio::test]
async fn test_login_event_reaches_the_app_port() {
    let dir = tempdir().unwrap();
    let helper = helper_in(&dir);
    let host = TestHost::default();
    let handle = Bootstrapper::new(
        Arc::clone(&helper),
        host.clone(),
        SystemClock::new(),
        NoopSetup,
        Profile::Development,
    )
    .initialize()
    .await
    .unwrap();
    let (flags, mut port) = host.take();
    assert_eq!(flags, Flags::anonymous());

    // Failures first: nothing may come through for these.
    helper.fail_login("popup closed");
    helper.fail_logout("network");
    helper.complete_logout();
    helper.complete_login(AuthResponse::new("xyz"));

    let token = tokio::time::timeout(Duration::from_secs(1), port.recv())
        .await
        .expect("login token should be forwarded")
        .unwrap();
    assert_eq!(token, "xyz");

    // Exactly one send per login event, nothing for the failures.
    tokio::task::yield_now().await;
    assert!(port.try_recv().is_err());
    handle.shutdown();
}

#[tokio::test]
async fn test_helper_stays_reachable_through_the_handle() {
    let dir = tempdir().unwrap();
    let helper = helper_in(&dir);
    let host = TestHost::default();
    let handle = Bootstrapper::new(
        Arc::clone(&helper),
        host,
        SystemClock::new(),
        NoopSetup,
        Profile::Production,
    )
    .initialize()
    .await
    .unwrap();

    let config = handle.helper().config().await.unwrap();
    assert_eq!(config, Profile::Production.oauth_config());
    handle.shutdown();
}

#[tokio::test]
async fn test_channel_host_supports_repeated_embeds() {
    let host = ChannelAppHost::new();
    let mount = MountPoint::default();
    assert!(host.embed(&mount, Flags::anonymous()).await.is_ok());
    assert!(host.embed(&mount, Flags::anonymous()).await.is_ok());
}
