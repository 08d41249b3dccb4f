use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/company.ts")]
pub struct CreateCompanyRequest {
    pub company_register_number: Option<String>,
    pub company_name_th: String,
    pub company_name_en: Option<String>,
    pub company_address: Option<String>,
    pub company_map: Option<String>,
    pub company_email: Option<String>,
    pub company_phone_number: Option<String>,
    pub company_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/company.ts")]
pub struct UpdateCompanyRequest {
    pub company_register_number: Option<String>,
    pub company_name_th: Option<String>,
    pub company_name_en: Option<String>,
    pub company_address: Option<String>,
    pub company_map: Option<String>,
    pub company_email: Option<String>,
    pub company_phone_number: Option<String>,
    pub company_type: Option<String>,
}

impl UpdateCompanyRequest {
    pub fn is_empty(&self) -> bool {
        self.company_register_number.is_none()
            && self.company_name_th.is_none()
            && self.company_name_en.is_none()
            && self.company_address.is_none()
            && self.company_map.is_none()
            && self.company_email.is_none()
            && self.company_phone_number.is_none()
            && self.company_type.is_none()
    }
}
