//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every request runs in its own tokio task and reports back with exactly one
//! completion [`Message`]. Nothing is cancelled; a second submission while the
//! first is in flight simply races it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::mpsc;

use faunara_api::FaunaraApi;
use faunara_core::image_file::file_name_of;
use faunara_core::prelude::*;
use faunara_core::{AttributeMap, ContributionRecord, FlowError, ImageFile};

use crate::message::Message;
use crate::preview::ImagePreview;
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<A>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, api: Arc<A>)
where
    A: FaunaraApi + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let message = execute_action(action, api.as_ref()).await;
        if let Err(e) = msg_tx.send(message).await {
            warn!("Dropping request completion, UI is gone: {}", e);
        }
    });
}

/// Run one action to completion and build its completion message
pub async fn execute_action<A>(action: UpdateAction, api: &A) -> Message
where
    A: FaunaraApi + Sync,
{
    match action {
        UpdateAction::ClassifyImage { image_path } => classify_image(api, image_path).await,
        UpdateAction::ClassifyAttributes { attributes } => {
            classify_attributes(api, &attributes).await
        }
        UpdateAction::Improve { record, image_path } => improve(api, *record, image_path).await,
    }
}

async fn read_image(path: &Path) -> Result<ImageFile> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::image_read(path, e.to_string()))?;
    debug!("Read {} bytes from {:?}", bytes.len(), path);
    Ok(ImageFile::new(file_name_of(path), bytes))
}

async fn read_optional_image(path: Option<&Path>) -> Result<Option<ImageFile>> {
    match path {
        Some(path) => read_image(path).await.map(Some),
        None => Ok(None),
    }
}

async fn classify_image<A>(api: &A, image_path: Option<PathBuf>) -> Message
where
    A: FaunaraApi + Sync,
{
    let image = match read_optional_image(image_path.as_deref()).await {
        Ok(image) => image,
        Err(e) => {
            return Message::ImageClassified {
                preview: None,
                outcome: Err(FlowError::from(e)),
            }
        }
    };

    let outcome = api
        .classify_image(image.as_ref())
        .await
        .map_err(FlowError::from);
    let preview = image.as_ref().and_then(ImagePreview::from_image);

    Message::ImageClassified { preview, outcome }
}

async fn classify_attributes<A>(api: &A, attributes: &AttributeMap) -> Message
where
    A: FaunaraApi + Sync,
{
    let outcome = api
        .classify_attributes(attributes)
        .await
        .map_err(FlowError::from);
    Message::AttributesClassified { outcome }
}

async fn improve<A>(api: &A, mut record: ContributionRecord, image_path: Option<PathBuf>) -> Message
where
    A: FaunaraApi + Sync,
{
    match read_optional_image(image_path.as_deref()).await {
        Ok(image) => record.image = image,
        Err(e) => {
            return Message::ContributionSaved {
                record: Box::new(record),
                preview: None,
                outcome: Err(FlowError::from(e)),
            }
        }
    }

    let outcome = api.improve(&record).await.map_err(FlowError::from);
    let preview = record.image.as_ref().and_then(ImagePreview::from_image);

    // The modal only needs the preview; drop the upload bytes
    record.image = None;

    Message::ContributionSaved {
        record: Box::new(record),
        preview,
        outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faunara_core::{ClassificationResponse, ContributionReceipt, ErrorClass};
    use std::io::Write;
    use std::sync::Mutex;

    /// Scripted [`FaunaraApi`] that records what it was asked
    #[derive(Default)]
    struct FakeApi {
        images: Mutex<Vec<Option<ImageFile>>>,
        records: Mutex<Vec<ContributionRecord>>,
        fail_with: Option<fn() -> Error>,
    }

    impl FaunaraApi for FakeApi {
        async fn classify_image(&self, image: Option<&ImageFile>) -> Result<ClassificationResponse> {
            self.images.lock().unwrap().push(image.cloned());
            match self.fail_with {
                Some(make) => Err(make()),
                None => Ok(ClassificationResponse {
                    match_score: Some(0.9),
                    ..Default::default()
                }),
            }
        }

        async fn classify_attributes(
            &self,
            _attributes: &AttributeMap,
        ) -> Result<ClassificationResponse> {
            match self.fail_with {
                Some(make) => Err(make()),
                None => Ok(ClassificationResponse::default()),
            }
        }

        async fn improve(&self, record: &ContributionRecord) -> Result<ContributionReceipt> {
            self.records.lock().unwrap().push(record.clone());
            match self.fail_with {
                Some(make) => Err(make()),
                None => Ok(ContributionReceipt {
                    id: Some(5),
                    message: None,
                }),
            }
        }
    }

    fn temp_image(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".png").tempfile().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[tokio::test]
    async fn test_classify_image_reads_file_and_builds_preview() {
        let api = FakeApi::default();
        let file = temp_image(b"not really a png");

        let message = execute_action(
            UpdateAction::ClassifyImage {
                image_path: Some(file.path().to_path_buf()),
            },
            &api,
        )
        .await;

        let sent = api.images.lock().unwrap();
        assert_eq!(sent[0].as_ref().map(ImageFile::len), Some(16));
        match message {
            Message::ImageClassified { preview, outcome } => {
                assert!(outcome.is_ok());
                assert!(preview.unwrap().caption().ends_with("16 B"));
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_classify_image_without_path_sends_no_image() {
        let api = FakeApi::default();

        let message =
            execute_action(UpdateAction::ClassifyImage { image_path: None }, &api).await;

        assert_eq!(api.images.lock().unwrap().as_slice(), &[None]);
        assert!(matches!(message, Message::ImageClassified { preview: None, .. }));
    }

    #[tokio::test]
    async fn test_unreadable_image_fails_without_request() {
        let api = FakeApi::default();

        let message = execute_action(
            UpdateAction::ClassifyImage {
                image_path: Some(PathBuf::from("/no/such/dir/cat.jpg")),
            },
            &api,
        )
        .await;

        assert!(api.images.lock().unwrap().is_empty());
        match message {
            Message::ImageClassified {
                outcome: Err(err), ..
            } => {
                assert_eq!(err.class, ErrorClass::Unknown);
                assert!(err.message.contains("cat.jpg"));
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failures_become_flow_errors() {
        let api = FakeApi {
            fail_with: Some(|| Error::domain(404, "No similar animal found in database", None)),
            ..Default::default()
        };

        let message =
            execute_action(UpdateAction::ClassifyImage { image_path: None }, &api).await;

        match message {
            Message::ImageClassified {
                outcome: Err(err), ..
            } => assert!(err.is_no_match()),
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_improve_uploads_image_but_returns_record_without_bytes() {
        let api = FakeApi::default();
        let file = temp_image(&[1, 2, 3, 4]);
        let record = ContributionRecord {
            name: "Okapi".to_string(),
            ..Default::default()
        };

        let message = execute_action(
            UpdateAction::Improve {
                record: Box::new(record),
                image_path: Some(file.path().to_path_buf()),
            },
            &api,
        )
        .await;

        let uploaded = api.records.lock().unwrap();
        assert_eq!(uploaded[0].image.as_ref().map(ImageFile::len), Some(4));
        match message {
            Message::ContributionSaved {
                record,
                preview,
                outcome,
            } => {
                assert_eq!(record.name, "Okapi");
                assert!(record.image.is_none());
                assert!(preview.is_some());
                assert_eq!(outcome.unwrap().id, Some(5));
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_handle_action_sends_completion() {
        let api = Arc::new(FakeApi::default());
        let (tx, mut rx) = mpsc::channel(1);
        let mut attributes = AttributeMap::new();
        attributes.insert_integer("legs", 2);

        handle_action(UpdateAction::ClassifyAttributes { attributes }, tx, api);

        let message = rx.recv().await.unwrap();
        assert!(matches!(
            message,
            Message::AttributesClassified { outcome: Ok(_) }
        ));
    }
}
