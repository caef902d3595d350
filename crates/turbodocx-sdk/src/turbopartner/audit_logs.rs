/*
[INPUT]:  Audit log filters
[OUTPUT]: Pages of partner audit log entries
[POS]:    Facade layer - partner audit log endpoint
[UPDATE]: When audit log filters change
*/

use super::TurboPartner;
use crate::http::Result;
use crate::types::{AuditLogListResponse, ListAuditLogsRequest};

impl TurboPartner {
    /// GET /partner/{pid}/audit-logs
    pub async fn get_partner_audit_logs(
        &self,
        request: Option<&ListAuditLogsRequest>,
    ) -> Result<AuditLogListResponse> {
        let params = request.map(|r| r.to_query_params()).unwrap_or_default();
        let value = self.client.get(&self.path("/audit-logs"), &params).await?;
        AuditLogListResponse::from_value(value)
    }
}
