use gatepass_core::service::scan_log::dto::GetScanLogListQueryDTO;

use super::dto::GetScanLogListQueryParamsRest;

impl From<GetScanLogListQueryParamsRest> for GetScanLogListQueryDTO {
    fn from(value: GetScanLogListQueryParamsRest) -> Self {
        Self { limit: value.limit }
    }
}
