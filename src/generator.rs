//! Draft record generation: a builtin sample, or structured generation
//! through the Gemini API when a key is configured.

use std::time::Duration;

use serde_json::{Value, json};
use thiserror::Error;

use crate::domain::employee::{Employee, EmployeeStatus, Gender};
use crate::models::config::ServerConfig;

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const INSTRUCTION: &str = "Generate a realistic JSON object for a Vietnamese employee \
in an HRM system. Include tax code and join date.";

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed generation response: {0}")]
    Malformed(String),
}

/// Fills a draft either instantly from the builtin sample or through the
/// generative API. Selection happens once at startup from the configuration.
#[derive(Clone)]
pub enum EmployeeGenerator {
    Builtin,
    Gemini(GeminiClient),
}

impl EmployeeGenerator {
    pub fn from_config(config: &ServerConfig) -> Self {
        match config.gemini_api_key.as_deref() {
            Some(key) if !key.is_empty() => EmployeeGenerator::Gemini(GeminiClient::new(
                key.to_string(),
                config.gemini_model.clone(),
            )),
            _ => EmployeeGenerator::Builtin,
        }
    }

    pub async fn generate(&self) -> Result<Employee, GeneratorError> {
        match self {
            EmployeeGenerator::Builtin => Ok(sample_employee()),
            EmployeeGenerator::Gemini(client) => client.generate_employee().await,
        }
    }
}

/// Minimal client for the `generateContent` structured-output call.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    pub async fn generate_employee(&self) -> Result<Employee, GeneratorError> {
        let url = format!("{GEMINI_BASE_URL}/{}:generateContent", self.model);
        let body = json!({
            "contents": [{ "parts": [{ "text": INSTRUCTION }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": employee_schema(),
                "temperature": 0.7,
            },
        });

        let reply: Value = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let text = reply["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| GeneratorError::Malformed("reply carries no text part".to_string()))?;

        serde_json::from_str(text).map_err(|e| GeneratorError::Malformed(e.to_string()))
    }
}

/// Response schema constraining the generated record to the wire format:
/// all 19 fields, label-valued enums, and the three required members.
fn employee_schema() -> Value {
    let gender_labels: Vec<&str> = Gender::ALL.iter().map(|g| g.label()).collect();
    let status_labels: Vec<&str> = EmployeeStatus::ALL.iter().map(|s| s.label()).collect();

    json!({
        "type": "OBJECT",
        "properties": {
            "employeeCode": { "type": "STRING", "description": "Unique code starting with NV" },
            "fullName": { "type": "STRING" },
            "dateOfBirth": { "type": "STRING", "description": "YYYY-MM-DD" },
            "gender": { "type": "STRING", "enum": gender_labels },
            "departmentId": { "type": "STRING", "description": "Department code like 'PB01'" },
            "position": { "type": "STRING" },
            "joinDate": { "type": "STRING", "description": "YYYY-MM-DD" },
            "status": { "type": "STRING", "enum": status_labels },
            "identityNumber": { "type": "STRING" },
            "identityDate": { "type": "STRING", "description": "YYYY-MM-DD" },
            "identityPlace": { "type": "STRING" },
            "taxCode": { "type": "STRING" },
            "addressPermanent": { "type": "STRING" },
            "addressContact": { "type": "STRING" },
            "phoneNumber": { "type": "STRING" },
            "email": { "type": "STRING" },
            "bankAccount": { "type": "STRING" },
            "bankName": { "type": "STRING" },
            "bankBranch": { "type": "STRING" },
        },
        "required": ["employeeCode", "fullName", "joinDate"],
    })
}

/// The builtin sample draft.
pub fn sample_employee() -> Employee {
    Employee {
        employee_code: "NV0001".to_string(),
        full_name: "Nguyễn Văn A".to_string(),
        date_of_birth: "1990-01-01".to_string(),
        gender: Gender::Male,
        department_id: "PB01".to_string(),
        position: "Nhân viên".to_string(),
        join_date: "2023-01-01".to_string(),
        status: EmployeeStatus::Active,
        identity_number: "0123456789".to_string(),
        identity_date: "2015-05-05".to_string(),
        identity_place: "TP. Hồ Chí Minh".to_string(),
        tax_code: "1234567890".to_string(),
        address_permanent: "123 Lý Thường Kiệt, TP. HCM".to_string(),
        address_contact: "123 Lý Thường Kiệt, TP. HCM".to_string(),
        phone_number: "0901123456".to_string(),
        email: "nguyenvana@example.com".to_string(),
        bank_account: "123456789".to_string(),
        bank_name: "Vietcombank".to_string(),
        bank_branch: "Tân Bình".to_string(),
    }
}
