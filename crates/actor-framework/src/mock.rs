//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are answered from a queue
//! of expectations instead of a running actor. It is the way to test an actor whose hooks call
//! other registries: run the actor under test for real and inject mocked clients as its context.
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **State** | None, answers are scripted | Real registry |
//! | **Error Injection** | `return_err` | Requires reproducing the state |
//! | **Use Case** | Logic *around* a dependency | The registry itself or the whole system |
//!
//! ```rust,ignore
//! let mut students = MockClient::<Party>::new();
//! students
//!     .expect_action(PartyId::from("S001"))
//!     .return_ok(PartyActionResult::Attach(LinkOutcome::Linked));
//!
//! let (course_actor, course_client) = course_actor::new(8);
//! tokio::spawn(course_actor.run(CourseContext::new(
//!     PartyClient::new(students.client()),
//!     PartyClient::new(teachers.client()),
//! )));
//! // ... drive course_client ...
//! students.verify();
//! ```
//!
//! Expectations are consumed in order. A request arriving with no matching expectation, or with
//! a different id than expected, is recorded and reported by [`MockClient::verify`].
//!
//! For finer control, [`create_mock_client`] returns the raw receiving end and the `expect_*`
//! helpers pull individual requests off it so a test can inspect payloads and respond by hand.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the scripted answer to it.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T::Id, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    failures: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called inside a Tokio runtime; the answering task is spawned immediately.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<T>>>> =
            Arc::new(Mutex::new(VecDeque::new()));
        let failures = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let failed = failures.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();
                let fail = |reason: String| failed.lock().unwrap().push(reason);

                match (request, expectation) {
                    (
                        ResourceRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        if id != expected {
                            fail(format!("get: expected id {expected}, got {id}"));
                        }
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        if id != expected {
                            fail(format!("action: expected id {expected}, got {id}"));
                        }
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        // Dropping the request drops its responder; the caller sees ActorDropped.
                        fail(format!("unexpected request: {}", describe(&request)));
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            failures,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, id: T::Id) -> GetExpectationBuilder<T> {
        GetExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ListExpectationBuilder<T> {
        ListExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects an `action` operation on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ActionExpectationBuilder<T> {
        ActionExpectationBuilder {
            id,
            expectations: self.expectations.clone(),
        }
    }

    /// Panics if an expectation was not consumed or a request did not match.
    pub fn verify(&self) {
        let failures = self.failures.lock().unwrap();
        if !failures.is_empty() {
            panic!("Mock received unexpected requests: {failures:?}");
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `get` expectations.
pub struct GetExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> GetExpectationBuilder<T> {
    pub fn return_ok(self, value: Option<T>) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<Option<T>, FrameworkError>) {
        self.expectations.lock().unwrap().push_back(Expectation::Get {
            id: self.id,
            response,
        });
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, id: T::Id) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create { response: Ok(id) });
    }

    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Create {
                response: Err(error),
            });
    }
}

/// Builder for `list` expectations.
pub struct ListExpectationBuilder<T: ActorEntity> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ListExpectationBuilder<T> {
    pub fn return_ok(self, items: Vec<T>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::List { response: Ok(items) });
    }
}

/// Builder for `action` expectations.
pub struct ActionExpectationBuilder<T: ActorEntity> {
    id: T::Id,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorEntity> ActionExpectationBuilder<T> {
    pub fn return_ok(self, result: T::ActionResult) {
        self.push(Ok(result));
    }

    pub fn return_err(self, error: FrameworkError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<T::ActionResult, FrameworkError>) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Action {
                id: self.id,
                response,
            });
    }
}

fn describe<T: ActorEntity>(request: &ResourceRequest<T>) -> String {
    match request {
        ResourceRequest::Create { params, .. } => format!("create {params:?}"),
        ResourceRequest::Get { id, .. } => format!("get {id}"),
        ResourceRequest::List { .. } => "list".to_string(),
        ResourceRequest::Count { .. } => "count".to_string(),
        ResourceRequest::Update { id, update, .. } => format!("update {id} {update:?}"),
        ResourceRequest::Delete { id, .. } => format!("delete {id}"),
        ResourceRequest::Action { id, action, .. } => format!("action {id} {action:?}"),
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a client together with the receiving end of its channel.
///
/// Nothing answers the requests; the test pulls them off `receiver` (see [`expect_action`])
/// and responds through the returned responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next message, if it is a Create request.
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T::Id, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Next message, if it is a Get request.
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    tokio::sync::oneshot::Sender<Result<Option<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Next message, if it is an Action request.
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::ActorEntity;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Ward {
        id: String,
        beds: u32,
    }

    #[derive(Debug)]
    struct WardCreate {
        id: String,
        beds: u32,
    }

    #[derive(Debug)]
    struct WardUpdate;

    #[derive(Debug)]
    enum WardAction {
        FreeBeds,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Ward error")]
    struct WardError;

    #[async_trait]
    impl ActorEntity for Ward {
        type Id = String;
        type Create = WardCreate;
        type Update = WardUpdate;
        type Action = WardAction;
        type ActionResult = u32;
        type Context = ();
        type Error = WardError;

        fn from_create_params(params: WardCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id: params.id,
                beds: params.beds,
            })
        }

        fn id(&self) -> &String {
            &self.id
        }

        async fn on_update(&mut self, _: WardUpdate, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _: WardAction, _: &()) -> Result<u32, Self::Error> {
            Ok(self.beds)
        }
    }

    fn ward(id: &str, beds: u32) -> Ward {
        Ward {
            id: id.to_string(),
            beds,
        }
    }

    #[tokio::test]
    async fn test_raw_channel_create() {
        let (client, mut receiver) = create_mock_client::<Ward>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(WardCreate {
                    id: "W1".into(),
                    beds: 4,
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.id, "W1");
        assert_eq!(payload.beds, 4);
        responder.send(Ok("W1".to_string())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result.unwrap(), "W1");
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Ward>::new();

        mock.expect_create().return_ok("W1".to_string());
        mock.expect_get("W1".to_string())
            .return_ok(Some(ward("W1", 4)));
        mock.expect_list().return_ok(vec![ward("W1", 4), ward("W2", 2)]);
        mock.expect_action("W2".to_string()).return_ok(2);

        let client = mock.client();

        let id = client
            .create(WardCreate {
                id: "W1".into(),
                beds: 4,
            })
            .await
            .unwrap();
        assert_eq!(id, "W1");

        let fetched = client.get("W1".to_string()).await.unwrap();
        assert_eq!(fetched, Some(ward("W1", 4)));

        assert_eq!(client.list().await.unwrap().len(), 2);
        assert_eq!(
            client
                .perform_action("W2".to_string(), WardAction::FreeBeds)
                .await
                .unwrap(),
            2
        );

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_reports_unexpected_request() {
        let mock = MockClient::<Ward>::new();
        let client = mock.client();

        let result = client.count().await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        let verdict = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verdict.is_err());
    }

    #[tokio::test]
    async fn test_mock_scripted_error() {
        let mut mock = MockClient::<Ward>::new();
        mock.expect_get("W9".to_string())
            .return_err(FrameworkError::ActorClosed);

        let result = mock.client().get("W9".to_string()).await;
        assert!(matches!(result, Err(FrameworkError::ActorClosed)));
        mock.verify();
    }
}
