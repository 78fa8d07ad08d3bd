use base64::{prelude::BASE64_STANDARD, Engine};
use ed25519_dalek::{Signer, SigningKey};
use reqwest::{multipart, Client, Response};
use serde_json::json;
use sha2::{Digest, Sha384};
use std::sync::Once;
use uuid::Uuid;

static INIT_ENV_ONCE: Once = Once::new();

pub fn init_env() {
    INIT_ENV_ONCE.call_once(|| {
        let _ = dotenvy::dotenv();
    });
}

pub fn address() -> String {
    std::env::var("CONF_TICKETS_BIND_ADDRESS").unwrap()
}

pub fn url(path: &str) -> String {
    format!("http://{}{path}", address())
}

pub fn unique_email() -> String {
    format!("{}@example.com", Uuid::new_v4().simple())
}

pub fn server_signing_key() -> SigningKey {
    let seed = std::env::var("CONF_TICKETS_ED25519_PRIVATE_KEY").unwrap();
    let seed: [u8; 32] = hex::decode(seed.trim()).unwrap().try_into().unwrap();

    SigningKey::from_bytes(&seed)
}

pub fn create_token(signing_key: &SigningKey, ticket_id: i64, email: &str) -> String {
    let hashed_email = Sha384::digest(email.as_bytes());
    let signed_segment = format!("{ticket_id}:{}", BASE64_STANDARD.encode(hashed_email));
    let signature = signing_key.sign(signed_segment.as_bytes());

    format!("{};{signed_segment}", hex::encode(signature.to_bytes()))
}

pub async fn upload_receipt(client: &Client, email: &str) -> anyhow::Result<Response> {
    let photo = multipart::Part::bytes(vec![0x89, b'P', b'N', b'G'])
        .file_name("receipt.png")
        .mime_str("image/png")?;
    let form = multipart::Form::new()
        .text("email", email.to_string())
        .part("photo", photo);

    let response = client
        .post(url("/api/v1/payment-receipt"))
        .multipart(form)
        .send()
        .await?;

    Ok(response)
}

pub async fn post_email(client: &Client, path: &str, email: &str) -> anyhow::Result<Response> {
    let response = client
        .post(url(path))
        .json(&json!({ "email": email }))
        .send()
        .await?;

    Ok(response)
}

pub async fn scan(client: &Client, code: &str) -> anyhow::Result<Response> {
    let response = client
        .post(url("/api/v1/ticket/scan"))
        .json(&json!({ "code": code }))
        .send()
        .await?;

    Ok(response)
}
