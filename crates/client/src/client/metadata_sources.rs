//! Metadata source API methods for [`MetadataClient`].
//!
//! A metadata source is the software server capability (database manager,
//! event broker, file system or application) whose metadata is being
//! catalogued. Its GUID is the `ExternalSource` GUID used on later calls.

use crate::client::MetadataClient;
use crate::error::Result;
use crate::models::{
    ApplicationProperties, DatabaseManagerProperties, EventBrokerProperties, FileSystemProperties,
};
use crate::rest::requests::{ExternalSource, NameRequestBody};

const DATABASE_MANAGERS: &str = data_manager_path!("/metadata-sources/database-managers");
const EVENT_BROKERS: &str = data_manager_path!("/metadata-sources/event-brokers");
const FILE_SYSTEMS: &str = data_manager_path!("/metadata-sources/filesystems");
const APPLICATIONS: &str = data_manager_path!("/metadata-sources/applications");
const BY_NAME: &str = data_manager_path!("/metadata-sources/by-name");

impl MetadataClient {
    /// Register a database manager and return its GUID.
    pub async fn create_database_manager(
        &self,
        source: &ExternalSource,
        properties: &DatabaseManagerProperties,
    ) -> Result<String> {
        self.create_element(
            "createDatabaseManager",
            DATABASE_MANAGERS,
            &[],
            source,
            properties,
        )
        .await
    }

    /// Register an event broker and return its GUID.
    pub async fn create_event_broker(
        &self,
        source: &ExternalSource,
        properties: &EventBrokerProperties,
    ) -> Result<String> {
        self.create_element("createEventBroker", EVENT_BROKERS, &[], source, properties)
            .await
    }

    /// Register a file system and return its GUID.
    pub async fn create_file_system(
        &self,
        source: &ExternalSource,
        properties: &FileSystemProperties,
    ) -> Result<String> {
        self.create_element("createFileSystem", FILE_SYSTEMS, &[], source, properties)
            .await
    }

    /// Register an application and return its GUID.
    pub async fn create_application(
        &self,
        source: &ExternalSource,
        properties: &ApplicationProperties,
    ) -> Result<String> {
        self.create_element("createApplication", APPLICATIONS, &[], source, properties)
            .await
    }

    /// Look up the GUID of a metadata source by its qualified name.
    pub async fn get_metadata_source_guid(&self, qualified_name: &str) -> Result<String> {
        const ACTION: &str = "getMetadataSourceGUID";

        self.validator.validate_user_id(self.user_id(), ACTION)?;
        self.validator
            .validate_name(qualified_name, "qualifiedName", ACTION)?;

        let body = NameRequestBody::new(qualified_name, "qualifiedName");
        self.invoker.post_for_guid(ACTION, BY_NAME, &[], &body).await
    }
}
