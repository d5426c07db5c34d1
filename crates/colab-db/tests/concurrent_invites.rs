//! Races on one database file: between separate services contending on the
//! SQLite write lock, and between tasks sharing one `Arc<ColabService>`.

use std::sync::Arc;

use colab_core::enums::CollaboratorRole;
use colab_core::errors::ErrorKind;
use colab_core::requests::NewProject;
use colab_db::service::ColabService;
use tempfile::TempDir;

async fn open(dir: &TempDir) -> ColabService {
    let path = dir.path().join("colab.db");
    ColabService::new_local(path.to_str().unwrap()).await.unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_duplicate_invite_has_one_winner() {
    let dir = TempDir::new().unwrap();
    let first = open(&dir).await;
    let owner = first.register_user("owner@lab.org").await.unwrap();
    let project = first
        .create_project(NewProject::new("Race track"), owner.id)
        .await
        .unwrap();
    let second = open(&dir).await;

    let (project_id, owner_id) = (project.id, owner.id);
    let first = Arc::new(first);
    let tasks = [first.clone(), Arc::new(second)].map(|svc| {
        tokio::spawn(async move {
            svc.invite_collaborator(project_id, owner_id, "u@x.com", CollaboratorRole::Editor)
                .await
        })
    });

    let mut wins = 0;
    let mut conflicts = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => wins += 1,
            Err(e) if e.kind() == ErrorKind::Conflict => conflicts += 1,
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    assert_eq!((wins, conflicts), (1, 1));

    let mut rows = first
        .db()
        .conn()
        .await
        .query(
            "SELECT COUNT(*) FROM invitations WHERE status = 'pending'",
            (),
        )
        .await
        .unwrap();
    let pending: i64 = rows.next().await.unwrap().unwrap().get(0).unwrap();
    assert_eq!(pending, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_accepts_add_one_member() {
    let dir = TempDir::new().unwrap();
    let first = open(&dir).await;
    let owner = first.register_user("owner@lab.org").await.unwrap();
    let user = first.register_user("u@x.com").await.unwrap();
    let project = first
        .create_project(NewProject::new("Race track"), owner.id)
        .await
        .unwrap();
    let inv = first
        .invite_collaborator(project.id, owner.id, "u@x.com", CollaboratorRole::Programmer)
        .await
        .unwrap();
    let second = open(&dir).await;

    let (project_id, inv_id, user_id) = (project.id, inv.id, user.id);
    let tasks = [Arc::new(first), Arc::new(second)].map(|svc| {
        tokio::spawn(async move {
            svc.respond_to_invitation(project_id, inv_id, user_id, "accept")
                .await
        })
    });

    let mut results = Vec::new();
    for task in tasks {
        results.push(task.await.unwrap().map_err(|e| e.kind()));
    }
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results.contains(&Err(ErrorKind::Conflict)));

    let check = open(&dir).await;
    let roster = check.list_collaborators(project.id).await.unwrap();
    assert_eq!(roster.len(), 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_service_invites_resolve_to_winner_or_conflict() {
    let dir = TempDir::new().unwrap();
    let svc = Arc::new(open(&dir).await);
    let owner = svc.register_user("owner@lab.org").await.unwrap();

    for round in 0..20 {
        let project = svc
            .create_project(NewProject::new(format!("Round {round}")), owner.id)
            .await
            .unwrap();
        let (project_id, owner_id) = (project.id, owner.id);

        let tasks = ["u@x.com", "v1@x.com", "u@x.com", "v3@x.com"].map(|email| {
            let svc = Arc::clone(&svc);
            tokio::spawn(async move {
                let result = svc
                    .invite_collaborator(project_id, owner_id, email, CollaboratorRole::Editor)
                    .await;
                (email, result.map(|_| ()).map_err(|e| e.kind()))
            })
        });

        let mut outcomes = Vec::new();
        for task in tasks {
            outcomes.push(task.await.unwrap());
        }

        for (email, result) in &outcomes {
            if email.starts_with('v') {
                assert_eq!(*result, Ok(()), "round {round}: invite to {email}");
            }
        }
        let duplicates: Vec<_> = outcomes
            .iter()
            .filter(|(email, _)| *email == "u@x.com")
            .map(|(_, result)| *result)
            .collect();
        assert!(duplicates.contains(&Ok(())), "round {round}: {duplicates:?}");
        assert!(
            duplicates.contains(&Err(ErrorKind::Conflict)),
            "round {round}: {duplicates:?}"
        );
    }

    let mut rows = svc
        .db()
        .conn()
        .await
        .query(
            "SELECT COUNT(*) FROM invitations WHERE status = 'pending'",
            (),
        )
        .await
        .unwrap();
    let pending: i64 = rows.next().await.unwrap().unwrap().get(0).unwrap();
    assert_eq!(pending, 60);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_service_reads_never_see_half_created_projects() {
    let dir = TempDir::new().unwrap();
    let svc = Arc::new(open(&dir).await);
    let owner = svc.register_user("owner@lab.org").await.unwrap();
    let owner_id = owner.id;

    let writer = {
        let svc = Arc::clone(&svc);
        tokio::spawn(async move {
            for n in 0..25 {
                svc.create_project(NewProject::new(format!("P{n}")), owner_id)
                    .await
                    .unwrap();
            }
        })
    };

    let reader = {
        let svc = Arc::clone(&svc);
        tokio::spawn(async move {
            for _ in 0..25 {
                for project in svc.list_projects().await.unwrap() {
                    let roster = svc.list_collaborators(project.id).await.unwrap();
                    assert_eq!(roster.len(), 1, "project {} without its owner row", project.id);
                }
                tokio::task::yield_now().await;
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();
    assert_eq!(svc.list_projects().await.unwrap().len(), 25);
}
