use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::results::{DeleteResult, InsertOneResult};
use mongodb::{Collection, Database};

use crate::modules::carts::model::{AddCartItemDto, CartItem};
use crate::utils::errors::AppError;

pub struct CartService;

impl CartService {
    fn collection(db: &Database) -> Collection<CartItem> {
        db.collection::<CartItem>("carts")
    }

    pub async fn items_for_email(db: &Database, email: &str) -> Result<Vec<CartItem>, AppError> {
        let items = Self::collection(db)
            .find(doc! { "email": email })
            .await?
            .try_collect()
            .await?;

        Ok(items)
    }

    pub async fn add_item(db: &Database, dto: AddCartItemDto) -> Result<InsertOneResult, AppError> {
        let item = CartItem {
            id: None,
            class_id: dto.class_id,
            title: dto.title,
            price: dto.price,
            email: dto.email,
        };

        let result = Self::collection(db).insert_one(&item).await?;
        Ok(result)
    }

    pub async fn remove_item(db: &Database, id: &str) -> Result<DeleteResult, AppError> {
        let object_id = ObjectId::parse_str(id)?;

        let result = Self::collection(db)
            .delete_one(doc! { "_id": object_id })
            .await?;

        Ok(result)
    }
}
