//! Storage Adapter Tests
//!
//! Runs the same behavioural checks against both `InsurancePort` adapters.
//!
//! The PostgreSQL tests need a reachable database and are ignored by default:
//!
//! ```text
//! TEST_DATABASE_URL=postgres://localhost/insurance_test cargo test -p infra_db -- --ignored
//! ```

use std::sync::Arc;

use core_kernel::{HealthCheckable, InsuranceId};
use domain_insurance::{InsurancePort, InsuranceService};
use infra_db::{create_pool_from_url, run_migrations, InMemoryInsuranceAdapter, PostgresInsuranceAdapter};
use test_utils::{DateFixtures, InsuranceFixtures, TestInsuranceBuilder};

/// Save, update, read and delete through the port
async fn exercise_crud(port: &dyn InsurancePort) {
    let saved = port.save(InsuranceFixtures::maria()).await.unwrap();
    let id = saved.id.expect("save assigns an id");
    assert_eq!(saved.policy_number, "ABC123");

    let mut changed = saved.clone();
    changed.holder_name = "Maria Atualizada".to_string();
    changed.claim_date = Some(DateFixtures::march_claim());
    port.save(changed).await.unwrap();

    let found = port.find_by_id(id).await.unwrap().expect("record is stored");
    assert_eq!(found.holder_name, "Maria Atualizada");
    assert_eq!(found.claim_date, Some(DateFixtures::march_claim()));

    port.delete_by_id(id).await.unwrap();
    assert!(port.find_by_id(id).await.unwrap().is_none());
}

mod memory_tests {
    use super::*;

    #[tokio::test]
    async fn test_crud_cycle() {
        exercise_crud(&InMemoryInsuranceAdapter::new()).await;
    }

    #[tokio::test]
    async fn test_service_over_memory_adapter() {
        let service = InsuranceService::new(Arc::new(InMemoryInsuranceAdapter::new()));
        service
            .create(InsuranceFixtures::claimed_on(1, DateFixtures::march_claim()))
            .await
            .unwrap();
        service
            .create(InsuranceFixtures::claimed_on(2, DateFixtures::march_claim()))
            .await
            .unwrap();
        service
            .create(TestInsuranceBuilder::new().build())
            .await
            .unwrap();

        let totals = service.calculate_total_premium_by_month().await.unwrap();

        assert_eq!(totals.len(), 1);
        assert_eq!(totals.get(&3), Some(&12000.0));
        assert_eq!(service.get_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_missing_id_is_none() {
        let adapter = InMemoryInsuranceAdapter::new();
        assert!(adapter.find_by_id(InsuranceId::new(99)).await.unwrap().is_none());
    }
}

mod postgres_tests {
    use super::*;

    async fn adapter() -> PostgresInsuranceAdapter {
        let url = std::env::var("TEST_DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/insurance_test".to_string());
        let pool = create_pool_from_url(&url).await.unwrap();
        run_migrations(&pool).await.unwrap();
        PostgresInsuranceAdapter::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_crud_cycle() {
        exercise_crud(&adapter().await).await;
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_explicit_id_then_generated_id() {
        let adapter = adapter().await;
        let explicit = adapter
            .save(TestInsuranceBuilder::new().with_id(900_000).build())
            .await
            .unwrap();
        let generated = adapter.save(TestInsuranceBuilder::new().build()).await.unwrap();

        assert_eq!(explicit.id, Some(InsuranceId::new(900_000)));
        assert!(generated.id.unwrap().value() > 900_000);

        adapter.delete_by_id(InsuranceId::new(900_000)).await.unwrap();
        adapter.delete_by_id(generated.id.unwrap()).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires TEST_DATABASE_URL"]
    async fn test_health_check() {
        let adapter = adapter().await;
        assert!(adapter.health_check().await.is_operational());
    }
}
