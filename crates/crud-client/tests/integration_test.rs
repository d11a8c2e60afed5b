use crud_client::{
    ChannelTransport, Persisted, RecordId, RequestError, ResourceActor, ResourceRequest,
    RestClient, RestEntity,
};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use validator::Validate;

// --- Test Entity ---

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Validate)]
struct Note {
    #[serde(default)]
    id: RecordId,
    #[validate(length(min = 1, message = "Text is required!"))]
    text: String,
}

#[derive(Debug)]
enum NoteField {
    Text(String),
}

impl RestEntity for Note {
    const RESOURCE: &'static str = "note";
    type Field = NoteField;

    fn id(&self) -> RecordId {
        self.id
    }

    fn with_id(self, id: RecordId) -> Self {
        Self { id, ..self }
    }

    fn apply(&mut self, field: NoteField) {
        match field {
            NoteField::Text(text) => self.text = text,
        }
    }
}

fn note(text: &str) -> Note {
    Note {
        id: 0,
        text: text.into(),
    }
}

fn spawn_client() -> RestClient<Note> {
    let (actor, transport) = ResourceActor::<Note>::new(10);
    tokio::spawn(actor.run());
    RestClient::new(transport)
}

// --- Test ---

#[tokio::test]
async fn test_resource_full_lifecycle() {
    let client = spawn_client();

    // 1. Save
    let saved = client.save(&note("buy milk")).await.unwrap();
    assert_eq!(saved.id, 1); // First ID should be 1

    // 2. List
    let all = client.find_all().await.unwrap();
    assert_eq!(all, vec![saved.clone()]);

    // 3. Update
    let mut edited = saved.clone();
    edited.apply(NoteField::Text("buy oat milk".into()));
    client.update(saved.id, &edited).await.unwrap();
    assert_eq!(client.find_by_id(saved.id).await.unwrap().text, "buy oat milk");
    assert_eq!(client.find_all().await.unwrap().len(), 1);

    // 4. Delete
    client.delete(saved.id).await.unwrap();
    assert!(client.find_all().await.unwrap().is_empty());
    let gone = client.find_by_id(saved.id).await.unwrap_err();
    assert_eq!(gone.status_code(), Some(404));
}

#[tokio::test]
async fn test_ids_are_never_reused() {
    let client = spawn_client();
    let first = client.save(&note("a")).await.unwrap();
    client.delete(first.id).await.unwrap();
    let second = client.save(&note("b")).await.unwrap();
    assert!(second.id > first.id);
}

#[tokio::test]
async fn test_save_ignores_incoming_id() {
    let client = spawn_client();
    let saved = client
        .save(&Note {
            id: 77,
            text: "sneaky".into(),
        })
        .await
        .unwrap();
    assert_eq!(saved.id, 1);
}

#[tokio::test]
async fn test_invalid_record_is_rejected_with_400() {
    let client = spawn_client();
    let err = client.save(&note("")).await.unwrap_err();
    assert_eq!(err.status_code(), Some(400));
    assert!(err.to_string().contains("Text is required!"), "got {err}");
    assert!(client.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unknown_id_fails_and_leaves_store_untouched() {
    let client = spawn_client();
    client.save(&note("keep me")).await.unwrap();

    let err = client.delete(999).await.unwrap_err();
    assert!(matches!(err, RequestError::Status { status: 404, .. }));

    let err = client
        .update(999, &Note { id: 999, text: "x".into() })
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    assert_eq!(client.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_persist_then_batch_delete() {
    let client = spawn_client();

    let mut ids = Vec::new();
    for text in ["one", "two", "three", "four"] {
        match client.persist(&note(text)).await.unwrap() {
            Persisted::Created(stored) => ids.push(stored.id),
            Persisted::Updated(_) => panic!("new record must be created"),
        }
    }

    let existing = client.find_by_id(ids[0]).await.unwrap();
    let outcome = client
        .persist(&Note {
            text: "uno".into(),
            ..existing
        })
        .await
        .unwrap();
    assert_eq!(outcome, Persisted::Updated(ids[0]));

    let deleted = client.delete_batch(&ids[..3]).await.unwrap();
    assert_eq!(deleted, 3);

    let left = client.find_all().await.unwrap();
    assert_eq!(left.len(), 1);
    assert_eq!(left[0].text, "four");
}

#[tokio::test]
async fn test_partial_batch_failure_keeps_successful_deletes() {
    let client = spawn_client();
    let a = client.save(&note("a")).await.unwrap();
    let b = client.save(&note("b")).await.unwrap();

    let err = client.delete_batch(&[a.id, 999, b.id]).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));

    assert!(client.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_preloaded_actor_continues_numbering() {
    let (actor, transport) = ResourceActor::with_records(
        10,
        vec![
            Note { id: 10, text: "ten".into() },
            note("no id yet"),
        ],
    );
    tokio::spawn(actor.run());
    let client = RestClient::new(transport);

    let listed: Vec<RecordId> = client
        .find_all()
        .await
        .unwrap()
        .iter()
        .map(|n| n.id)
        .collect();
    assert_eq!(listed, vec![10, 11]);

    let saved = client.save(&note("next")).await.unwrap();
    assert_eq!(saved.id, 12);
}

#[tokio::test]
async fn test_stopped_actor_reports_closed() {
    let (actor, transport) = ResourceActor::<Note>::new(10);
    drop(actor);
    let client = RestClient::new(transport);

    let err = client.find_all().await.unwrap_err();
    assert!(matches!(err, RequestError::Closed));
}

#[tokio::test]
async fn test_preloaded_max_id_does_not_overflow() {
    let (actor, transport) = ResourceActor::with_records(
        10,
        vec![Note {
            id: RecordId::MAX,
            text: "last".into(),
        }],
    );
    tokio::spawn(actor.run());
    let client = RestClient::new(transport);

    assert_eq!(client.find_all().await.unwrap()[0].id, RecordId::MAX);

    // no id left to hand out, and the stored record is not overwritten
    let err = client.save(&note("one too many")).await.unwrap_err();
    assert_eq!(err.status_code(), Some(409));
    let all = client.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].text, "last");
}

#[tokio::test]
async fn test_lost_reply_reports_dropped() {
    let (sender, mut receiver) = mpsc::channel::<ResourceRequest<Note>>(1);
    tokio::spawn(async move {
        // take the request and drop it along with its reply channel
        let request = receiver.recv().await;
        drop(request);
    });
    let client = RestClient::new(ChannelTransport::new(sender));

    let err = client.find_all().await.unwrap_err();
    assert!(matches!(err, RequestError::Dropped), "got {err:?}");
}
