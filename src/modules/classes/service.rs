use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::results::{InsertOneResult, UpdateResult};
use mongodb::{Collection, Database};

use crate::modules::classes::model::{ClassStatus, ClassSubmission, NewClassDto};
use crate::utils::errors::AppError;

pub struct ClassService;

impl ClassService {
    fn collection(db: &Database) -> Collection<ClassSubmission> {
        db.collection::<ClassSubmission>("classes")
    }

    /// Public catalog: approved submissions, most seats first.
    pub async fn approved_classes(db: &Database) -> Result<Vec<ClassSubmission>, AppError> {
        let classes = Self::collection(db)
            .find(doc! { "status": ClassStatus::Approved.as_str() })
            .sort(doc! { "availableSeats": -1 })
            .await?
            .try_collect()
            .await?;

        Ok(classes)
    }

    /// Moderation queue: every submission regardless of status.
    pub async fn all_submissions(db: &Database) -> Result<Vec<ClassSubmission>, AppError> {
        let classes = Self::collection(db)
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        Ok(classes)
    }

    pub async fn submissions_for_instructor(
        db: &Database,
        email: &str,
    ) -> Result<Vec<ClassSubmission>, AppError> {
        let classes = Self::collection(db)
            .find(doc! { "instructorEmail": email })
            .await?
            .try_collect()
            .await?;

        Ok(classes)
    }

    pub async fn submit(db: &Database, dto: NewClassDto) -> Result<InsertOneResult, AppError> {
        let submission = ClassSubmission {
            id: None,
            title: dto.title,
            instructor_name: dto.instructor_name,
            instructor_email: dto.instructor_email,
            price: dto.price,
            photo_url: dto.photo_url,
            available_seats: dto.available_seats,
            status: None,
        };

        let result = Self::collection(db).insert_one(&submission).await?;
        Ok(result)
    }

    pub async fn set_status(
        db: &Database,
        id: &str,
        status: ClassStatus,
    ) -> Result<UpdateResult, AppError> {
        let object_id = ObjectId::parse_str(id)?;

        let result = Self::collection(db)
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "status": status.as_str() } },
            )
            .await?;

        Ok(result)
    }
}
