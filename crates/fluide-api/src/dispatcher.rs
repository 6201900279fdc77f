//! Command dispatcher.
//!
//! Translates the three album commands into gateway calls and packs each
//! result as a JSON reply on the command's `-reply` channel, tagged with the
//! caller's correlation id.

use std::sync::Arc;

use fluide_models::{Album, CreateAlbumResult, UploadResult};
use fluide_storage::{AlbumStore, Log, StorageContext};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{ApiError, ApiResult};

/// Arguments of `create-empty-album`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAlbumRequest {
    #[validate(length(min = 1, message = "customer must not be empty"))]
    pub customer: String,
    #[validate(length(min = 1, message = "album name must not be empty"))]
    pub name: String,
}

/// Arguments of `upload-to-album`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UploadToAlbumRequest {
    /// Local folder whose files are uploaded.
    #[validate(length(min = 1, message = "dir must not be empty"))]
    pub dir: String,
    #[validate(length(min = 1, message = "customer must not be empty"))]
    pub customer: String,
    #[validate(length(min = 1, message = "album name must not be empty"))]
    pub name: String,
}

/// A command received from the caller.
#[derive(Debug, Clone)]
pub enum Command {
    CreateEmptyAlbum(CreateAlbumRequest),
    GetAlbums,
    UploadToAlbum(UploadToAlbumRequest),
}

impl Command {
    /// Parse a command from its wire name and JSON arguments.
    pub fn parse(name: &str, args: serde_json::Value) -> ApiResult<Self> {
        let invalid = |e: serde_json::Error| ApiError::bad_request(format!("{}: {}", name, e));

        match name {
            "create-empty-album" => Ok(Self::CreateEmptyAlbum(
                serde_json::from_value(args).map_err(invalid)?,
            )),
            "get-albums" => Ok(Self::GetAlbums),
            "upload-to-album" => Ok(Self::UploadToAlbum(
                serde_json::from_value(args).map_err(invalid)?,
            )),
            other => Err(ApiError::UnknownCommand(other.to_string())),
        }
    }

    /// Wire name of the command.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CreateEmptyAlbum(_) => "create-empty-album",
            Self::GetAlbums => "get-albums",
            Self::UploadToAlbum(_) => "upload-to-album",
        }
    }

    /// Channel the reply is sent on.
    pub fn reply_channel(&self) -> String {
        format!("{}-reply", self.name())
    }
}

/// Reply to one command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub correlation_id: String,
    pub channel: String,
    /// JSON-serialized result, or `{"error": ..}` when the command failed.
    pub payload: String,
}

#[derive(Serialize)]
struct ErrorPayload<'a> {
    error: &'a str,
}

/// Routes commands to the album gateway.
#[derive(Clone)]
pub struct Dispatcher {
    albums: AlbumStore,
    log: Arc<dyn Log>,
}

impl Dispatcher {
    /// Build a dispatcher; `log` is its own logger, separate from the gateway's.
    pub fn new(ctx: StorageContext, log: Arc<dyn Log>) -> Self {
        Self {
            albums: AlbumStore::new(ctx),
            log,
        }
    }

    /// Run a command and build its reply.
    ///
    /// Failures of the command itself come back inside the reply payload.
    pub async fn dispatch(&self, correlation_id: String, command: Command) -> Reply {
        let channel = command.reply_channel();
        self.log.debug(&format!(
            "Dispatching {} ({})",
            command.name(),
            correlation_id
        ));

        let payload = match self.run(command).await {
            Ok(payload) => payload,
            Err(e) => {
                self.log
                    .warn(&format!("Command on {} failed: {}", channel, e));
                error_payload(&e.to_string())
            }
        };

        Reply {
            correlation_id,
            channel,
            payload,
        }
    }

    async fn run(&self, command: Command) -> ApiResult<String> {
        let payload = match command {
            Command::CreateEmptyAlbum(request) => {
                serde_json::to_string(&self.create_empty_album(request).await?)?
            }
            Command::GetAlbums => serde_json::to_string(&self.get_albums().await)?,
            Command::UploadToAlbum(request) => {
                serde_json::to_string(&self.upload_to_album(request).await?)?
            }
        };
        Ok(payload)
    }

    pub async fn create_empty_album(
        &self,
        request: CreateAlbumRequest,
    ) -> ApiResult<CreateAlbumResult> {
        request.validate()?;
        Ok(self
            .albums
            .create_album(&request.customer, &request.name)
            .await)
    }

    pub async fn get_albums(&self) -> Vec<Album> {
        self.albums.list_albums().await
    }

    pub async fn upload_to_album(
        &self,
        request: UploadToAlbumRequest,
    ) -> ApiResult<Vec<UploadResult>> {
        request.validate()?;
        let results = self
            .albums
            .upload_folder(&request.customer, &request.name, &request.dir)
            .await?;
        Ok(results)
    }
}

fn error_payload(message: &str) -> String {
    serde_json::to_string(&ErrorPayload { error: message })
        .unwrap_or_else(|_| r#"{"error":"unserializable error"}"#.to_string())
}

#[cfg(test)]
mod tests {
    use std::path::Path;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use fluide_storage::{BucketInfo, ObjectStore, StorageResult};
    use serde_json::json;

    use super::*;

    struct EmptyStore;

    #[async_trait]
    impl ObjectStore for EmptyStore {
        async fn list_buckets(&self) -> StorageResult<Vec<BucketInfo>> {
            Ok(Vec::new())
        }

        async fn create_bucket(&self, _bucket: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }

        async fn put_object(
            &self,
            _bucket: &str,
            _key: &str,
            _source: &Path,
            _content_type: &str,
        ) -> StorageResult<()> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingLog {
        lines: Mutex<Vec<String>>,
    }

    impl CountingLog {
        fn count(&self) -> usize {
            self.lines.lock().unwrap().len()
        }
    }

    impl Log for CountingLog {
        fn debug(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
        fn info(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
        fn warn(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
        fn error(&self, message: &str) {
            self.lines.lock().unwrap().push(message.to_string());
        }
    }

    #[tokio::test]
    async fn test_dispatch_logs_to_its_own_logger() {
        let gateway_log = Arc::new(CountingLog::default());
        let dispatcher_log = Arc::new(CountingLog::default());
        let dispatcher = Dispatcher::new(
            StorageContext::new(Arc::new(EmptyStore), gateway_log.clone()),
            dispatcher_log.clone(),
        );

        let reply = dispatcher
            .dispatch("req-1".to_string(), Command::GetAlbums)
            .await;

        assert_eq!(reply.payload, "[]");
        assert_eq!(dispatcher_log.count(), 1);
        assert_eq!(gateway_log.count(), 0);
    }

    #[test]
    fn test_parse_commands() {
        let create = Command::parse(
            "create-empty-album",
            json!({"customer": "acme", "name": "winter"}),
        )
        .unwrap();
        assert_eq!(create.name(), "create-empty-album");
        assert_eq!(create.reply_channel(), "create-empty-album-reply");

        let list = Command::parse("get-albums", json!({})).unwrap();
        assert!(matches!(list, Command::GetAlbums));

        let upload = Command::parse(
            "upload-to-album",
            json!({"dir": "/tmp/photos", "customer": "acme", "name": "winter"}),
        )
        .unwrap();
        assert_eq!(upload.reply_channel(), "upload-to-album-reply");
    }

    #[test]
    fn test_parse_rejects_unknown_and_missing_args() {
        assert!(matches!(
            Command::parse("delete-album", json!({})),
            Err(ApiError::UnknownCommand(_))
        ));
        assert!(matches!(
            Command::parse("upload-to-album", json!({"customer": "acme"})),
            Err(ApiError::BadRequest(_))
        ));
        assert!(matches!(
            Command::parse("create-empty-album", serde_json::Value::Null),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_validation_rejects_empty_fields() {
        let request = CreateAlbumRequest {
            customer: String::new(),
            name: "winter".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_error_payload_is_json() {
        let payload: serde_json::Value = serde_json::from_str(&error_payload("no \"dir\"")).unwrap();
        assert_eq!(payload["error"], "no \"dir\"");
    }
}
