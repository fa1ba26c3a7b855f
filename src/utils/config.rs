//! Configuration and constants for the CLI.

/// Tool name, used in log lines and the log file name
pub const TOOL_NAME: &str = "o365 Audit Log Extractor";

/// Tool version reported by `version` and at startup
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

// Field names inside the exported CSV and the AuditData payload
pub const AUDIT_DATA_COLUMN: &str = "AuditData";
pub const USER_IDS_COLUMN: &str = "UserIds";
pub const WORKLOAD_FIELD: &str = "Workload";
pub const CREATION_TIME_FIELD: &str = "CreationTime";

/// Fixed column layout of an unmodified Protection Center export
pub const EXPORT_COLUMNS: [&str; 4] = ["CreationDate", USER_IDS_COLUMN, "Operations", AUDIT_DATA_COLUMN];

/// Default prefix for output files
pub const DEFAULT_PREFIX: &str = "o365AuditLog";

/// Scope name used in place of a workload for combined output
pub const COMBINED_SCOPE: &str = "combinedRecords";

/// Prefix prepended to the input file name by the sanitizer
pub const REDACTED_FILE_PREFIX: &str = "redacted";

/// Replacement value for redacted fields
pub const REDACTED_MARKER: &str = "*REDACTED*";

// Top-level AuditData fields the sanitizer redacts. Customize to fit your environment.
pub const REDACTED_FIELDS: &[&str] = &[
    "LogonUserSid",
    "Query",
    "ModifiedProperties",
    "ActorIpAddress",
    "MailboxOwnerUPN",
    "ListId",
    "DestinationFileName",
    "Item",
    "SessionId",
    "WebId",
    "MachineId",
    "Parameters",
    "ApplicationId",
    "ExchangeLocations",
    "CorrelationId",
    "UserKey",
    "ClientVersion",
    "TargetUserOrGroupName",
    "ObjectId",
    "Id",
    "SourceRelativeUrl",
    "ActorContextId",
    "DestFolder",
    "OriginatingServer",
    "SiteUrl",
    "MailboxGuid",
    "ClientIP",
    "IntraSystemId",
    "Target",
    "ExtendedProperties",
    "Actor",
    "MachineDomainInfo",
    "UserAgent",
    "ClientIPAddress",
    "UniqueSharingId",
    "OrganizationId",
    "DestinationRelativeUrl",
    "MailboxOwnerSid",
    "UserId",
    "ListItemUniqueId",
    "MailboxOwnerMasterAccountSid",
    "InterSystemsId",
    "SourceFileName",
    "OrganizationName",
    "AffectedItems",
    "EffectiveOrganization",
    "ClientInfoString",
    "TargetContextId",
    "EventData",
    "ClientApplication",
    "Site",
    "Folder",
];
