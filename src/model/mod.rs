//! Resources of the Cumulocity REST API.
//!
//! Resources that devices and applications extend with their own fragments are extensible records, the others
//! are plain serde types.

mod alarm;
mod application;
mod audit_record;
mod category_options;
mod custom_properties;
mod event;
mod external_id;
mod managed_object;
mod measurement;
mod operation;
mod reference;
mod retention_rule;
mod tenant;
mod tenant_option;
mod tolerant;
mod trusted_certificate;
mod user;

pub use alarm::{Alarm, AlarmStatus, Severity};
pub use application::{Application, ApplicationAvailability, ApplicationOwner, ApplicationType, TenantReference};
pub use audit_record::{AuditRecord, AuditRecordType, AuditSeverity, Change, ChangeType};
pub use category_options::CategoryOptions;
pub use custom_properties::CustomProperties;
pub use event::Event;
pub use external_id::ExternalId;
pub use managed_object::ManagedObject;
pub use measurement::{Measurement, MeasurementSeries, MeasurementValue};
pub use operation::{Operation, OperationStatus};
pub use reference::{ManagedObjectReference, Marker, ObjectChildren, SourceReference};
pub use retention_rule::{RetentionDataType, RetentionRule};
pub use tenant::{Tenant, TenantStatus};
pub use tenant_option::TenantOption;
pub use tolerant::Tolerant;
pub use trusted_certificate::{CertificateStatus, TrustedCertificate};
pub use user::User;
