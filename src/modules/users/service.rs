use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::{Collection, Database};

use crate::modules::users::model::{CreateUserDto, User, UserRole};
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    fn collection(db: &Database) -> Collection<User> {
        db.collection::<User>("users")
    }

    /// Idempotent signup: an email already present leaves the collection
    /// untouched and returns `None`.
    pub async fn create_user(
        db: &Database,
        dto: CreateUserDto,
    ) -> Result<Option<InsertOneResult>, AppError> {
        let users = Self::collection(db);

        let existing = users.find_one(doc! { "email": dto.email.as_str() }).await?;
        if existing.is_some() {
            return Ok(None);
        }

        let user = User {
            id: None,
            name: dto.name,
            email: dto.email,
            photo_url: dto.photo_url,
            role: dto.role,
        };

        let result = users.insert_one(&user).await?;
        Ok(Some(result))
    }

    pub async fn get_users(db: &Database) -> Result<Vec<User>, AppError> {
        let users = Self::collection(db).find(doc! {}).await?.try_collect().await?;
        Ok(users)
    }

    pub async fn find_by_email(db: &Database, email: &str) -> Result<Option<User>, AppError> {
        let user = Self::collection(db).find_one(doc! { "email": email }).await?;
        Ok(user)
    }

    /// Identity resolver: the stored role for an email, [`UserRole::None`]
    /// when no user matches or the field is absent. A missing record is a
    /// valid state, not an error.
    pub async fn role_for_email(db: &Database, email: &str) -> Result<UserRole, AppError> {
        let user = Self::find_by_email(db, email).await?;
        Ok(user.map(|u| u.role()).unwrap_or(UserRole::None))
    }

    pub async fn set_role(
        db: &Database,
        id: &str,
        role: UserRole,
    ) -> Result<UpdateResult, AppError> {
        let object_id = ObjectId::parse_str(id)?;

        let result = Self::collection(db)
            .update_one(
                doc! { "_id": object_id },
                doc! { "$set": { "role": role.as_str() } },
            )
            .await?;

        Ok(result)
    }

    pub async fn delete_user(db: &Database, id: &str) -> Result<DeleteResult, AppError> {
        let object_id = ObjectId::parse_str(id)?;

        let result = Self::collection(db)
            .delete_one(doc! { "_id": object_id })
            .await?;

        Ok(result)
    }
}
