//! REST client for the remote fitness service.
//!
//! Listings are paginated. Every mutation is followed by a fixed delay, and so is every page but
//! the last, to stay below the rate limit of the service.

use std::time::Duration;

use liftsync_domain as domain;
use log::debug;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::json;

pub const DEFAULT_BASE_URL: &str = "https://api.hevyapp.com/v1";
pub const TEMPLATE_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub page_delay: Duration,
    pub mutation_delay: Duration,
}

impl Pacing {
    pub const NONE: Pacing = Pacing {
        page_delay: Duration::ZERO,
        mutation_delay: Duration::ZERO,
    };
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            page_delay: Duration::from_millis(100),
            mutation_delay: Duration::from_millis(200),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub method: domain::Method,
    pub path: String,
    pub query: Vec<(&'static str, String)>,
    pub body: Option<serde_json::Value>,
}

impl Request {
    fn get(path: impl Into<String>) -> Self {
        Self {
            method: domain::Method::Get,
            path: path.into(),
            query: vec![],
            body: None,
        }
    }

    fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: domain::Method::Post,
            path: path.into(),
            query: vec![],
            body: Some(body),
        }
    }

    fn put(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            method: domain::Method::Put,
            path: path.into(),
            query: vec![],
            body: Some(body),
        }
    }

    fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: String,
}

impl Response {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[allow(async_fn_in_trait)]
pub trait SendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, domain::StorageError>;
}

pub struct ReqwestSendRequest {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ReqwestSendRequest {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, domain::StorageError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| domain::StorageError::Other(Box::new(err)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }
}

impl SendRequest for ReqwestSendRequest {
    async fn send_request(&self, request: Request) -> Result<Response, domain::StorageError> {
        let method = match request.method {
            domain::Method::Get => reqwest::Method::GET,
            domain::Method::Post => reqwest::Method::POST,
            domain::Method::Put => reqwest::Method::PUT,
        };
        let mut builder = self
            .client
            .request(method, format!("{}{}", self.base_url, request.path))
            .header("api-key", &self.api_key)
            .query(&request.query);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;
        Ok(Response { status, body })
    }
}

fn transport_error(err: reqwest::Error) -> domain::StorageError {
    if err.is_connect() || err.is_timeout() {
        domain::StorageError::NoConnection
    } else {
        domain::StorageError::Other(Box::new(err))
    }
}

pub struct REST<S: SendRequest> {
    sender: S,
    pacing: Pacing,
}

impl REST<ReqwestSendRequest> {
    pub fn connect(base_url: &str, api_key: &str) -> Result<Self, domain::StorageError> {
        Ok(Self::new(
            ReqwestSendRequest::new(base_url, api_key)?,
            Pacing::default(),
        ))
    }
}

impl<S: SendRequest> REST<S> {
    pub fn new(sender: S, pacing: Pacing) -> Self {
        Self { sender, pacing }
    }

    async fn send(&self, request: Request) -> Result<String, domain::StorageError> {
        let method = request.method;
        let resource = request.path.clone();
        debug!("{method} {resource}");
        let response = self.sender.send_request(request).await?;
        if response.is_success() {
            Ok(response.body)
        } else {
            Err(domain::StorageError::Status {
                method,
                resource,
                status: response.status,
                body: response.body,
            })
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: Request) -> Result<T, domain::StorageError> {
        let method = request.method;
        let resource = request.path.clone();
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|err| domain::StorageError::Deserialization {
            method,
            resource,
            reason: err.to_string(),
        })
    }

    async fn mutate(&self, request: Request) -> Result<String, domain::StorageError> {
        let body = self.send(request).await?;
        tokio::time::sleep(self.pacing.mutation_delay).await;
        Ok(body)
    }

    /// Reads all pages of a listing. The items of a page are stored under `key`.
    async fn read_all<T: DeserializeOwned>(
        &self,
        path: &str,
        key: &str,
        page_size: Option<u32>,
    ) -> Result<Vec<T>, domain::StorageError> {
        let mut items = vec![];
        let mut page = 1;
        let mut page_count = 1;

        while page <= page_count {
            if page > 1 {
                tokio::time::sleep(self.pacing.page_delay).await;
            }
            let mut request = Request::get(path).query("page", page);
            if let Some(page_size) = page_size {
                request = request.query("pageSize", page_size);
            }
            let (count, page_items) = self.fetch::<Page>(request).await?.into_items(key).map_err(
                |reason| domain::StorageError::Deserialization {
                    method: domain::Method::Get,
                    resource: path.to_string(),
                    reason,
                },
            )?;
            page_count = count;
            items.extend(page_items);
            page += 1;
        }

        Ok(items)
    }

    async fn create<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> Result<T, domain::StorageError> {
        let body = self.mutate(Request::post(path, body)).await?;
        serde_json::from_str(&body).map_err(|err| domain::StorageError::Deserialization {
            method: domain::Method::Post,
            resource: path.to_string(),
            reason: err.to_string(),
        })
    }
}

#[derive(Deserialize)]
struct Page {
    #[serde(default = "first_page")]
    page_count: u32,
    #[serde(flatten)]
    items: serde_json::Map<String, serde_json::Value>,
}

fn first_page() -> u32 {
    1
}

impl Page {
    fn into_items<T: DeserializeOwned>(mut self, key: &str) -> Result<(u32, Vec<T>), String> {
        let items = self
            .items
            .remove(key)
            .ok_or_else(|| format!("missing field `{key}`"))?;
        let items = serde_json::from_value(items).map_err(|err| err.to_string())?;
        Ok((self.page_count, items))
    }
}

impl<S: SendRequest> domain::ExerciseTemplateRepository for REST<S> {
    async fn read_exercise_templates(
        &self,
    ) -> Result<Vec<domain::ExerciseTemplate>, domain::ReadError> {
        Ok(self
            .read_all::<ExerciseTemplate>(
                "/exercise_templates",
                "exercise_templates",
                Some(TEMPLATE_PAGE_SIZE),
            )
            .await?
            .into_iter()
            .map(domain::ExerciseTemplate::from)
            .collect())
    }

    async fn create_exercise_template(
        &self,
        template: domain::NewExerciseTemplate,
    ) -> Result<domain::ExerciseTemplate, domain::CreateError> {
        let path = "/exercise_templates";
        let body = self
            .mutate(Request::post(
                path,
                json!({ "exercise": NewExerciseTemplate::from(&template) }),
            ))
            .await?;
        Ok(created_exercise_template(&body, template).ok_or_else(|| {
            domain::StorageError::Deserialization {
                method: domain::Method::Post,
                resource: path.to_string(),
                reason: format!("unexpected response: {body}"),
            }
        })?)
    }
}

/// The service answers with the created template or just with its id.
fn created_exercise_template(
    body: &str,
    registration: domain::NewExerciseTemplate,
) -> Option<domain::ExerciseTemplate> {
    let id = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => {
            if let Some(template) = value.get("exercise_template") {
                return serde_json::from_value::<ExerciseTemplate>(template.clone())
                    .ok()
                    .map(domain::ExerciseTemplate::from);
            }
            match value.get("id").unwrap_or(&value) {
                serde_json::Value::String(id) => id.clone(),
                serde_json::Value::Number(id) => id.to_string(),
                _ => return None,
            }
        }
        Err(_) => body.trim().to_string(),
    };
    (!id.is_empty()).then(|| domain::ExerciseTemplate::from((id.into(), registration)))
}

impl<S: SendRequest> domain::RoutineFolderRepository for REST<S> {
    async fn read_routine_folders(&self) -> Result<Vec<domain::RoutineFolder>, domain::ReadError> {
        Ok(self
            .read_all::<RoutineFolder>("/routine_folders", "routine_folders", None)
            .await?
            .into_iter()
            .map(domain::RoutineFolder::from)
            .collect())
    }

    async fn create_routine_folder(
        &self,
        title: String,
    ) -> Result<domain::RoutineFolder, domain::CreateError> {
        let created: CreatedRoutineFolder = self
            .create(
                "/routine_folders",
                json!({ "routine_folder": { "title": title } }),
            )
            .await?;
        Ok(created.routine_folder.into())
    }
}

impl<S: SendRequest> domain::RoutineRepository for REST<S> {
    async fn read_routines(&self) -> Result<Vec<domain::Routine>, domain::ReadError> {
        Ok(self
            .read_all::<Routine>("/routines", "routines", None)
            .await?
            .into_iter()
            .map(domain::Routine::from)
            .collect())
    }

    async fn create_routine(
        &self,
        folder_id: domain::FolderID,
        routine: domain::RoutineDraft,
    ) -> Result<domain::Routine, domain::CreateError> {
        let created: CreatedRoutine = self
            .create(
                "/routines",
                json!({ "routine": RoutinePayload::new(&routine, Some(folder_id)) }),
            )
            .await?;
        let id = match created.routine {
            OneOrMany::One(routine) => Some(routine.id),
            OneOrMany::Many(routines) => routines.first().map(|r| r.id),
        }
        .ok_or_else(|| domain::StorageError::Deserialization {
            method: domain::Method::Post,
            resource: "/routines".to_string(),
            reason: "empty routine list".to_string(),
        })?;
        Ok(domain::Routine {
            id: id.into(),
            title: routine.title,
            folder_id: Some(folder_id),
        })
    }

    async fn update_routine(
        &self,
        id: domain::RoutineID,
        routine: domain::RoutineDraft,
    ) -> Result<domain::RoutineID, domain::UpdateError> {
        self.mutate(Request::put(
            format!("/routines/{id}"),
            json!({ "routine": RoutinePayload::new(&routine, None) }),
        ))
        .await?;
        Ok(id)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ExerciseTemplate {
    pub id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub exercise_type: String,
    #[serde(default)]
    pub primary_muscle_group: String,
    #[serde(default)]
    pub secondary_muscle_groups: Vec<String>,
    #[serde(default)]
    pub equipment: String,
    #[serde(default)]
    pub is_custom: bool,
}

impl From<ExerciseTemplate> for domain::ExerciseTemplate {
    fn from(value: ExerciseTemplate) -> Self {
        Self {
            id: value.id.into(),
            title: value.title,
            exercise_type: value.exercise_type.parse().unwrap_or_default(),
            primary_muscle_group: value.primary_muscle_group.parse().unwrap_or_default(),
            secondary_muscle_groups: value
                .secondary_muscle_groups
                .iter()
                .map(|m| m.parse().unwrap_or_default())
                .collect(),
            equipment: value.equipment.parse().unwrap_or_default(),
            is_custom: value.is_custom,
        }
    }
}

impl From<&domain::ExerciseTemplate> for ExerciseTemplate {
    fn from(value: &domain::ExerciseTemplate) -> Self {
        Self {
            id: value.id.to_string(),
            title: value.title.clone(),
            exercise_type: value.exercise_type.to_string(),
            primary_muscle_group: value.primary_muscle_group.remote_name().to_string(),
            secondary_muscle_groups: value
                .secondary_muscle_groups
                .iter()
                .map(|m| m.remote_name().to_string())
                .collect(),
            equipment: value.equipment.remote_name().to_string(),
            is_custom: value.is_custom,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
struct NewExerciseTemplate {
    title: String,
    exercise_type: String,
    muscle_group: String,
    other_muscles: Vec<String>,
    equipment_category: String,
}

impl From<&domain::NewExerciseTemplate> for NewExerciseTemplate {
    fn from(value: &domain::NewExerciseTemplate) -> Self {
        Self {
            title: value.title.clone(),
            exercise_type: value.exercise_type.to_string(),
            muscle_group: value.muscle_group.remote_name().to_string(),
            other_muscles: value
                .other_muscles
                .iter()
                .map(|m| m.remote_name().to_string())
                .collect(),
            equipment_category: value.equipment.remote_name().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RoutineFolder {
    pub id: u64,
    pub title: String,
}

impl From<RoutineFolder> for domain::RoutineFolder {
    fn from(value: RoutineFolder) -> Self {
        Self {
            id: value.id.into(),
            title: value.title,
        }
    }
}

impl From<&domain::RoutineFolder> for RoutineFolder {
    fn from(value: &domain::RoutineFolder) -> Self {
        Self {
            id: value.id.into(),
            title: value.title.clone(),
        }
    }
}

#[derive(Deserialize)]
struct CreatedRoutineFolder {
    routine_folder: RoutineFolder,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Routine {
    pub id: uuid::Uuid,
    pub title: String,
    #[serde(default)]
    pub folder_id: Option<u64>,
}

impl From<Routine> for domain::Routine {
    fn from(value: Routine) -> Self {
        Self {
            id: value.id.into(),
            title: value.title,
            folder_id: value.folder_id.map(domain::FolderID::from),
        }
    }
}

impl From<&domain::Routine> for Routine {
    fn from(value: &domain::Routine) -> Self {
        Self {
            id: *value.id,
            title: value.title.clone(),
            folder_id: value.folder_id.map(u64::from),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

#[derive(Deserialize)]
struct CreatedRoutine {
    routine: OneOrMany<Routine>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct RoutinePayload {
    title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    folder_id: Option<u64>,
    notes: String,
    exercises: Vec<RoutineExercise>,
}

impl RoutinePayload {
    fn new(routine: &domain::RoutineDraft, folder_id: Option<domain::FolderID>) -> Self {
        Self {
            title: routine.title.clone(),
            folder_id: folder_id.map(u64::from),
            notes: routine.notes.clone(),
            exercises: routine
                .exercises
                .iter()
                .map(RoutineExercise::from)
                .collect(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct RoutineExercise {
    exercise_template_id: String,
    superset_id: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
    sets: Vec<Set>,
}

impl From<&domain::RoutineExercise> for RoutineExercise {
    fn from(value: &domain::RoutineExercise) -> Self {
        Self {
            exercise_template_id: value.template_id.to_string(),
            superset_id: None,
            notes: value.notes.clone(),
            sets: value.sets.iter().map(Set::from).collect(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct Set {
    #[serde(rename = "type")]
    set_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    weight_kg: Option<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reps: Option<Option<u32>>,
}

impl From<&domain::Set> for Set {
    fn from(value: &domain::Set) -> Self {
        Self {
            set_type: "normal",
            weight_kg: field(value.weight),
            reps: field(value.reps),
        }
    }
}

fn field<T>(value: domain::SetValue<T>) -> Option<Option<T>> {
    match value {
        domain::SetValue::Omitted => None,
        domain::SetValue::Null => Some(None),
        domain::SetValue::Value(value) => Some(Some(value)),
    }
}
