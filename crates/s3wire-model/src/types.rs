//! Canned enumerations and shared sub-structures.

use std::collections::BTreeMap;

use crate::error::S3ErrorCode;

/// User metadata attached to an object (`x-amz-meta-*`).
///
/// Ordered so equality and hashing do not depend on insertion order.
pub type Metadata = BTreeMap<String, String>;

s3_enum! {
    /// S3 ObjectCannedACL enum.
    pub enum ObjectCannedACL {
        Private => "private",
        PublicRead => "public-read",
        PublicReadWrite => "public-read-write",
        AuthenticatedRead => "authenticated-read",
        AwsExecRead => "aws-exec-read",
        BucketOwnerRead => "bucket-owner-read",
        BucketOwnerFullControl => "bucket-owner-full-control",
    }
}

s3_enum! {
    /// S3 ServerSideEncryption enum.
    pub enum ServerSideEncryption {
        Aes256 => "AES256",
        AwsKms => "aws:kms",
    }
}

s3_enum! {
    /// S3 StorageClass enum.
    pub enum StorageClass {
        Standard => "STANDARD",
        ReducedRedundancy => "REDUCED_REDUNDANCY",
        StandardIa => "STANDARD_IA",
        OnezoneIa => "ONEZONE_IA",
        IntelligentTiering => "INTELLIGENT_TIERING",
        Glacier => "GLACIER",
        DeepArchive => "DEEP_ARCHIVE",
    }
}

s3_enum! {
    /// S3 RequestPayer enum.
    pub enum RequestPayer {
        Requester => "requester",
    }
}

s3_enum! {
    /// S3 RequestCharged enum.
    pub enum RequestCharged {
        Requester => "requester",
    }
}

s3_enum! {
    /// S3 ObjectLockMode enum.
    pub enum ObjectLockMode {
        Governance => "GOVERNANCE",
        Compliance => "COMPLIANCE",
    }
}

s3_enum! {
    /// S3 ObjectLockLegalHoldStatus enum.
    pub enum ObjectLockLegalHoldStatus {
        On => "ON",
        Off => "OFF",
    }
}

s3_enum! {
    /// S3 ReplicationStatus enum.
    pub enum ReplicationStatus {
        Complete => "COMPLETE",
        Pending => "PENDING",
        Failed => "FAILED",
        Replica => "REPLICA",
    }
}

s3_enum! {
    /// S3 MetadataDirective enum.
    pub enum MetadataDirective {
        Copy => "COPY",
        Replace => "REPLACE",
    }
}

s3_enum! {
    /// S3 TaggingDirective enum.
    pub enum TaggingDirective {
        Copy => "COPY",
        Replace => "REPLACE",
    }
}

s3_enum! {
    /// S3 OwnerOverride enum.
    pub enum OwnerOverride {
        /// Replica ownership is transferred to the destination bucket owner.
        Destination => "Destination",
    }
}

s3_shape! {
    /// S3 AccessControlTranslation.
    ///
    /// Container for replica ownership overrides in a replication rule.
    pub struct AccessControlTranslation {
        owner: OwnerOverride => "Owner",
    }
}

s3_shape! {
    /// S3 Error.
    ///
    /// One failed entry of a batch response such as `DeleteObjects`.
    pub struct Error {
        key: String => "Key",
        version_id: String => "VersionId",
        code: String => "Code",
        message: String => "Message",
    }
}

impl Error {
    /// Classify `code` against the well-known vocabulary.
    ///
    /// Codes outside the vocabulary come back as [`S3ErrorCode::Unknown`].
    #[must_use]
    pub fn error_code(&self) -> Option<S3ErrorCode> {
        self.code.as_deref().map(S3ErrorCode::from)
    }
}

s3_shape! {
    /// S3 DeletedObject.
    pub struct DeletedObject {
        key: String => "Key",
        version_id: String => "VersionId",
        delete_marker: bool => "DeleteMarker",
        delete_marker_version_id: String => "DeleteMarkerVersionId",
    }
}
