//! SQLite repository integration tests.

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use payment_types::{ClientType, NewPayment, Payment, PaymentId, PaymentRepository, RepoError};
    use rust_decimal_macros::dec;

    use crate::SqliteRepo;

    async fn setup_repo() -> SqliteRepo {
        SqliteRepo::new("sqlite::memory:").await.unwrap()
    }

    fn draft(client: &str, amount: rust_decimal::Decimal) -> NewPayment {
        NewPayment {
            active_id: "A1".to_string(),
            client_id: client.to_string(),
            amount,
            type_code: ClientType::Personal,
            date_registered: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = setup_repo().await;

        let saved = repo.insert(draft("C1", dec!(50.0))).await.unwrap();
        let fetched = repo.get(saved.id).await.unwrap().unwrap();

        assert_eq!(fetched.id, saved.id);
        assert_eq!(fetched.active_id, "A1");
        assert_eq!(fetched.client_id, "C1");
        assert_eq!(fetched.amount, dec!(50.0));
        assert_eq!(fetched.type_code, ClientType::Personal);
        assert!(fetched.date_updated.is_none());
    }

    #[tokio::test]
    async fn test_get_missing_is_none() {
        let repo = setup_repo().await;

        let result = repo.get(PaymentId::new()).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_exists() {
        let repo = setup_repo().await;
        let saved = repo.insert(draft("C1", dec!(1))).await.unwrap();

        assert!(repo.exists(saved.id).await.unwrap());
        assert!(!repo.exists(PaymentId::new()).await.unwrap());
    }

    #[tokio::test]
    async fn test_amount_survives_text_round_trip() {
        let repo = setup_repo().await;

        // Values that drift under binary floating point stay exact as text.
        let saved = repo.insert(draft("C1", dec!(0.1))).await.unwrap();
        repo.insert(draft("C1", dec!(0.2))).await.unwrap();

        let fetched = repo.get(saved.id).await.unwrap().unwrap();
        assert_eq!(fetched.amount, dec!(0.1));

        let total: rust_decimal::Decimal = repo
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.amount)
            .sum();
        assert_eq!(total, dec!(0.3));
    }

    #[tokio::test]
    async fn test_negative_amount_round_trips() {
        let repo = setup_repo().await;

        let saved = repo.insert(draft("C1", dec!(-12.75))).await.unwrap();
        let fetched = repo.get(saved.id).await.unwrap().unwrap();

        assert_eq!(fetched.amount, dec!(-12.75));
    }

    #[tokio::test]
    async fn test_update_overwrites_and_stamps() {
        let repo = setup_repo().await;
        let saved = repo.insert(draft("C1", dec!(5))).await.unwrap();

        let mut changed = saved.clone();
        changed.client_id = "C2".to_string();
        changed.amount = dec!(7.5);
        changed.date_updated = Some(Utc::now());
        repo.update(changed).await.unwrap();

        let fetched = repo.get(saved.id).await.unwrap().unwrap();
        assert_eq!(fetched.client_id, "C2");
        assert_eq!(fetched.amount, dec!(7.5));
        assert!(fetched.date_updated.is_some());
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = setup_repo().await;
        let phantom = Payment::from_new(PaymentId::new(), draft("C1", dec!(1)));

        let result = repo.update(phantom).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = setup_repo().await;
        let saved = repo.insert(draft("C1", dec!(1))).await.unwrap();

        assert!(repo.delete(saved.id).await.unwrap());
        assert!(!repo.delete(saved.id).await.unwrap());
        assert!(repo.get(saved.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all() {
        let repo = setup_repo().await;

        repo.insert(draft("C1", dec!(1))).await.unwrap();
        repo.insert(draft("C2", dec!(2))).await.unwrap();
        repo.insert(draft("C1", dec!(3))).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 3);
    }
}
