use super::{
    ticket_token::{TicketPayload, TicketToken},
    TicketingService, TicketingServiceConfig, TicketingServiceImpl,
};
use crate::{
    dto::input,
    error::Error,
    repository::{TicketingRepository, TicketingRepositoryMemory},
    service::{
        blob_storage_service::{FilesystemBlobStorageService, FilesystemBlobStorageServiceConfig},
        mail_service::{self, Mail, MailService},
        qr_code_service::{QrCodeServiceConfig, QrCodeServiceImpl},
        signature_service::SignatureService,
    },
};
use axum::async_trait;
use ed25519_dalek::SigningKey;
use sha2::{Digest, Sha256};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

const EMAIL: &str = "a@x.com";

#[derive(Default)]
struct RecordingMailService {
    sent: Mutex<Vec<Mail>>,
}

#[async_trait]
impl MailService for RecordingMailService {
    async fn send(&self, mail: Mail) -> Result<(), mail_service::Error> {
        self.sent.lock().unwrap().push(mail);
        Ok(())
    }
}

struct Scenario {
    service: Arc<TicketingServiceImpl>,
    repository: Arc<TicketingRepositoryMemory>,
    mail_service: Arc<RecordingMailService>,
    signature_service: SignatureService,
    blob_directory: TempDir,
}

async fn create_scenario() -> Scenario {
    let blob_directory = tempfile::tempdir().unwrap();
    let blob_storage_service =
        FilesystemBlobStorageService::new(FilesystemBlobStorageServiceConfig {
            directory: blob_directory.path().to_path_buf(),
        })
        .await
        .unwrap();

    let repository = Arc::new(TicketingRepositoryMemory::default());
    let mail_service = Arc::new(RecordingMailService::default());
    let signature_service = SignatureService::new(SigningKey::from_bytes(&[42; 32]));

    let service = TicketingServiceImpl::new(
        TicketingServiceConfig {
            event_name: "ExampleConf".to_string(),
            mail_domain: "example.com".to_string(),
        },
        repository.clone(),
        Arc::new(blob_storage_service),
        mail_service.clone(),
        Arc::new(QrCodeServiceImpl::new(QrCodeServiceConfig { size: 256 })),
        signature_service.clone(),
    );

    Scenario {
        service: Arc::new(service),
        repository,
        mail_service,
        signature_service,
        blob_directory,
    }
}

fn create_token(signature_service: &SignatureService, id: i64, email: &str) -> String {
    let payload = TicketPayload::new(id, email);
    let signature = signature_service.sign(payload.encode().as_bytes());

    TicketToken::encode(&signature, &payload)
}

fn scan(code: &str) -> input::TicketScan {
    input::TicketScan {
        code: code.to_string(),
    }
}

fn participant(email: &str) -> input::ParticipantEmail {
    input::ParticipantEmail {
        email: email.to_string(),
    }
}

async fn store_receipt(service: &TicketingServiceImpl, email: &str) {
    service
        .store_payment_receipt(input::PaymentReceipt {
            email: email.to_string(),
            photo: vec![0xFF, 0xD8, 0xFF],
            content_type: "image/jpeg".to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn receipt_validation_and_single_redemption() {
    let scenario = create_scenario().await;
    store_receipt(&scenario.service, EMAIL).await;

    let ticket_issued = scenario
        .service
        .validate_payment_receipt(participant(EMAIL))
        .await
        .unwrap();

    assert_eq!(ticket_issued.sha256sum.len(), 64);
    assert!(ticket_issued
        .sha256sum
        .chars()
        .all(|c| c.is_ascii_hexdigit()));

    let record = scenario
        .repository
        .find_latest_by_email(EMAIL)
        .await
        .unwrap()
        .unwrap();
    assert!(record.paid);
    assert_eq!(record.sha256_sum, ticket_issued.sha256sum);

    let sent = scenario.mail_service.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        hex::encode(Sha256::digest(&sent[0].attachments[0].payload)),
        ticket_issued.sha256sum
    );

    let token = create_token(&scenario.signature_service, record.id, EMAIL);

    let ticketing = scenario.service.verify_ticket(scan(&token)).await.unwrap();
    assert_eq!(ticketing.email, EMAIL);
    assert!(ticketing.used);

    let result = scenario.service.verify_ticket(scan(&token)).await;
    assert!(matches!(result, Err(Error::InvalidTicket(_))));
}

#[tokio::test]
async fn receipt_stored_in_blob_directory() {
    let scenario = create_scenario().await;
    store_receipt(&scenario.service, EMAIL).await;

    let record = scenario.repository.records().remove(0);
    let path = scenario.blob_directory.path().join(&record.receipt_photo_path);

    assert!(record.receipt_photo_path.ends_with("_a@x.com.jpeg"));
    assert!(!record.paid);
    assert_eq!(std::fs::read(path).unwrap(), vec![0xFF, 0xD8, 0xFF]);
}

#[tokio::test]
async fn receipt_reuploaded_keeps_issued_ticket() {
    let scenario = create_scenario().await;
    store_receipt(&scenario.service, EMAIL).await;
    let ticket_issued = scenario
        .service
        .validate_payment_receipt(participant(EMAIL))
        .await
        .unwrap();

    store_receipt(&scenario.service, EMAIL).await;

    let records = scenario.repository.records();
    assert_eq!(records.len(), 1);
    assert!(records[0].paid);
    assert_eq!(records[0].sha256_sum, ticket_issued.sha256sum);
}

#[tokio::test]
async fn validate_payment_receipt_without_receipt() {
    let scenario = create_scenario().await;

    let result = scenario
        .service
        .validate_payment_receipt(participant(EMAIL))
        .await;

    assert!(matches!(result, Err(Error::InvalidTicket(_))));
    assert!(scenario.repository.records().is_empty());
    assert!(scenario.mail_service.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn validate_payment_receipt_twice_same_ticket() {
    let scenario = create_scenario().await;
    store_receipt(&scenario.service, EMAIL).await;

    let first = scenario
        .service
        .validate_payment_receipt(participant(EMAIL))
        .await
        .unwrap();
    let second = scenario
        .service
        .validate_payment_receipt(participant(EMAIL))
        .await
        .unwrap();

    let sent = scenario.mail_service.sent.lock().unwrap().clone();
    assert_eq!(first.sha256sum, second.sha256sum);
    assert_eq!(sent[0], sent[1]);
}

#[tokio::test]
async fn resend_ticket_identical_mail() {
    let scenario = create_scenario().await;
    store_receipt(&scenario.service, EMAIL).await;
    scenario
        .service
        .validate_payment_receipt(participant(EMAIL))
        .await
        .unwrap();

    scenario
        .service
        .resend_ticket(participant(EMAIL))
        .await
        .unwrap();

    let sent = scenario.mail_service.sent.lock().unwrap().clone();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0], sent[1]);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_redemption_single_winner() {
    let scenario = create_scenario().await;
    store_receipt(&scenario.service, EMAIL).await;
    scenario
        .service
        .validate_payment_receipt(participant(EMAIL))
        .await
        .unwrap();
    let id = scenario.repository.records()[0].id;
    let token = create_token(&scenario.signature_service, id, EMAIL);

    let handles = (0..16)
        .map(|_| {
            let service = scenario.service.clone();
            let token = token.clone();
            tokio::spawn(async move { service.verify_ticket(scan(&token)).await })
        })
        .collect::<Vec<_>>();

    let mut accepted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => accepted += 1,
            Err(err) => assert!(matches!(err, Error::InvalidTicket(_))),
        }
    }

    assert_eq!(accepted, 1);
}

#[tokio::test]
async fn concurrent_redemption_pair() {
    let scenario = create_scenario().await;
    store_receipt(&scenario.service, EMAIL).await;
    let id = scenario.repository.records()[0].id;
    let token = create_token(&scenario.signature_service, id, EMAIL);

    let (first, second) = tokio::join!(
        scenario.service.verify_ticket(scan(&token)),
        scenario.service.verify_ticket(scan(&token)),
    );

    assert!(first.is_ok() ^ second.is_ok());
}

#[tokio::test]
async fn flipped_byte_rejected() {
    let scenario = create_scenario().await;
    store_receipt(&scenario.service, EMAIL).await;
    let id = scenario.repository.records()[0].id;
    let token = create_token(&scenario.signature_service, id, EMAIL);

    // 0x20 toggles ASCII letter case
    for mask in [0x01, 0x02, 0x04, 0x08, 0x10, 0x20] {
        for idx in 0..token.len() {
            let mut bytes = token.clone().into_bytes();
            bytes[idx] ^= mask;
            let flipped = String::from_utf8(bytes).unwrap();

            let result = scenario.service.verify_ticket(scan(&flipped)).await;

            assert!(result.is_err(), "byte {idx} flipped with {mask:#04x} accepted");
        }
    }

    assert!(!scenario.repository.records()[0].used);
    scenario.service.verify_ticket(scan(&token)).await.unwrap();
}

#[tokio::test]
async fn case_flipped_signature_rejected() {
    let scenario = create_scenario().await;
    store_receipt(&scenario.service, EMAIL).await;
    let id = scenario.repository.records()[0].id;
    let token = create_token(&scenario.signature_service, id, EMAIL);
    let (signature, _) = token.split_once(';').unwrap();

    for (idx, _) in signature
        .char_indices()
        .filter(|(_, c)| c.is_ascii_lowercase())
    {
        let mut flipped = token.clone();
        flipped.replace_range(idx..idx + 1, &token[idx..idx + 1].to_ascii_uppercase());

        let result = scenario.service.verify_ticket(scan(&flipped)).await;

        assert!(
            matches!(result, Err(Error::MalformedTicket(_))),
            "upper case byte {idx} accepted"
        );
    }

    assert!(!scenario.repository.records()[0].used);
}

#[tokio::test]
async fn token_for_repurposed_record_rejected() {
    let scenario = create_scenario().await;
    store_receipt(&scenario.service, EMAIL).await;
    let id = scenario.repository.records()[0].id;

    let token = create_token(&scenario.signature_service, id, "someone@else.com");
    let result = scenario.service.verify_ticket(scan(&token)).await;

    assert!(matches!(result, Err(Error::InvalidTicket(_))));
    assert!(!scenario.repository.records()[0].used);
}

#[tokio::test]
async fn malformed_token_store_untouched() {
    let scenario = create_scenario().await;
    store_receipt(&scenario.service, EMAIL).await;
    let before = scenario.repository.records();

    for code in ["no delimiters", "abcd;no-colon", "abcd:1;x"] {
        let result = scenario.service.verify_ticket(scan(code)).await;

        assert!(matches!(result, Err(Error::MalformedTicket(_))));
    }

    assert_eq!(scenario.repository.records(), before);
}

#[tokio::test]
async fn used_ticket_cannot_be_resent() {
    let scenario = create_scenario().await;
    store_receipt(&scenario.service, EMAIL).await;
    scenario
        .service
        .validate_payment_receipt(participant(EMAIL))
        .await
        .unwrap();
    let id = scenario.repository.records()[0].id;
    scenario.repository.set_used(id, true);

    let result = scenario.service.resend_ticket(participant(EMAIL)).await;

    assert!(matches!(result, Err(Error::InvalidTicket(_))));
}

#[tokio::test]
async fn redeemed_ticket_not_revalidated() {
    let scenario = create_scenario().await;
    store_receipt(&scenario.service, EMAIL).await;
    scenario
        .service
        .validate_payment_receipt(participant(EMAIL))
        .await
        .unwrap();
    let id = scenario.repository.records()[0].id;
    let token = create_token(&scenario.signature_service, id, EMAIL);
    scenario.service.verify_ticket(scan(&token)).await.unwrap();

    let result = scenario
        .service
        .validate_payment_receipt(participant(EMAIL))
        .await;

    assert!(matches!(result, Err(Error::InvalidTicket(_))));
    assert_eq!(scenario.mail_service.sent.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn student_flag_orthogonal() {
    let scenario = create_scenario().await;
    store_receipt(&scenario.service, EMAIL).await;

    scenario
        .service
        .verify_is_student(participant(EMAIL))
        .await
        .unwrap();
    scenario
        .service
        .validate_payment_receipt(participant(EMAIL))
        .await
        .unwrap();

    let id = scenario.repository.records()[0].id;
    let token = create_token(&scenario.signature_service, id, EMAIL);
    let ticketing = scenario.service.verify_ticket(scan(&token)).await.unwrap();

    assert!(ticketing.student);
    assert!(ticketing.paid);
}
