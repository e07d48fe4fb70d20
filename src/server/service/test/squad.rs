use super::*;
use crate::server::model::squad::Squad;

/// Tests that squads are filtered on their own cohort and tribe, without the person scope.
#[tokio::test]
async fn list_in_scope_filters_cohort_and_tribe() {
    let test = TestBuilder::new()
        .with_squads(fixture::squad::roster())
        .build()
        .await
        .unwrap();
    let client = client_for(&test);

    let squads = SquadService::new(&client).list_in_scope().await;

    let names: Vec<_> = squads.iter().filter_map(Squad::name).collect();
    assert_eq!(names, vec!["1G", "1H", "1I"]);

    let queries = test.received_queries("/items/squad").await;
    assert_eq!(
        queries,
        vec![vec![
            ("filter[cohort]".to_string(), "2526".to_string()),
            ("filter[tribe][name]".to_string(), "FDND Jaar 1".to_string()),
        ]]
    );
}

/// Tests that a failing squad endpoint leaves the roster empty.
#[tokio::test]
async fn list_in_scope_failure_is_empty() {
    let test = TestBuilder::new()
        .with_response("squad", ResponseTemplate::new(500))
        .build()
        .await
        .unwrap();
    let client = client_for(&test);

    assert!(SquadService::new(&client).list_in_scope().await.is_empty());
}
