use super::{IParticipationRepo, InsertParticipationError};
use crate::repos::shared::inmemory_repo::*;
use stagepass_domain::{Participation, PaymentStatus, ID};

pub struct InMemoryParticipationRepo {
    participations: std::sync::Mutex<Vec<Participation>>,
}

impl InMemoryParticipationRepo {
    pub fn new() -> Self {
        Self {
            participations: std::sync::Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl IParticipationRepo for InMemoryParticipationRepo {
    async fn insert(
        &self,
        participation: &Participation,
    ) -> Result<(), InsertParticipationError> {
        // Check and insert under one lock to mirror the unique
        // (user, event) index in the postgres store
        let mut collection = self.participations.lock().unwrap();
        if collection
            .iter()
            .any(|p| p.user_id == participation.user_id && p.event_id == participation.event_id)
        {
            return Err(InsertParticipationError::AlreadyExists);
        }
        collection.push(participation.clone());
        Ok(())
    }

    async fn save(&self, participation: &Participation) -> anyhow::Result<()> {
        save(participation, &self.participations);
        Ok(())
    }

    async fn find_by_user_and_event(&self, user_id: &ID, event_id: &ID) -> Option<Participation> {
        find_by(&self.participations, |p| {
            p.user_id == *user_id && p.event_id == *event_id
        })
        .into_iter()
        .next()
    }

    async fn find_pending_by_intent(&self, intent_id: &str) -> Option<Participation> {
        find_by(&self.participations, |p| {
            p.payment_status == PaymentStatus::Pending
                && p.payment_intent_id.as_deref() == Some(intent_id)
        })
        .into_iter()
        .next()
    }

    async fn delete_by_user_and_event(
        &self,
        user_id: &ID,
        event_id: &ID,
    ) -> Option<Participation> {
        find_and_delete_by(&self.participations, |p| {
            p.user_id == *user_id && p.event_id == *event_id
        })
        .into_iter()
        .next()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn participation(user_id: ID, event_id: ID) -> Participation {
        Participation {
            id: Default::default(),
            user_id,
            event_id,
            payment_status: PaymentStatus::Pending,
            amount: 2500,
            payment_intent_id: None,
            created: 0,
        }
    }

    #[actix_web::main]
    #[test]
    async fn rejects_second_participation_for_same_user_and_event() {
        let repo = InMemoryParticipationRepo::new();
        let user_id = ID::new();
        let event_id = ID::new();

        repo.insert(&participation(user_id.clone(), event_id.clone()))
            .await
            .unwrap();
        let res = repo
            .insert(&participation(user_id.clone(), event_id.clone()))
            .await;
        assert!(matches!(res, Err(InsertParticipationError::AlreadyExists)));

        // Other pairs are unaffected
        assert!(repo
            .insert(&participation(user_id, ID::new()))
            .await
            .is_ok());
    }

    #[actix_web::main]
    #[test]
    async fn settled_participation_is_not_found_by_intent() {
        let repo = InMemoryParticipationRepo::new();
        let mut p = participation(ID::new(), ID::new());
        p.payment_intent_id = Some("pi_123".into());
        repo.insert(&p).await.unwrap();

        assert!(repo.find_pending_by_intent("pi_123").await.is_some());

        p.payment_status = PaymentStatus::Paid;
        repo.save(&p).await.unwrap();
        assert!(repo.find_pending_by_intent("pi_123").await.is_none());
    }
}
