use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder, Transaction};
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::listing::model::{Listing, ListingImage};
use business::domain::listing::repository::{ListingFilter, ListingRepository};
use business::domain::listing::value_objects::PaymentMethod;

use super::entity::{ListingEntity, ListingImageEntity, ListingPaymentMethodEntity};

const LISTING_COLUMNS: &str = "id, seller_id, title, description, brand, category_id, price, discounted_price, original_price, quantity, unit, condition, manufacturer_date, expiry_date, best_before, pickup_address, is_delivery_available, delivery_fee, size, allergen_info, storage_info, is_donation, commission, status, created_at, updated_at";

pub struct ListingRepositoryPostgres {
    pool: PgPool,
}

impl ListingRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Writes listings with their images and payment method links inside the
    /// caller's transaction. Ids come with the aggregates, so the rows can
    /// be inserted in bulk without reading anything back.
    async fn insert_all(
        tx: &mut Transaction<'_, Postgres>,
        listings: &[Listing],
    ) -> Result<(), RepositoryError> {
        if listings.is_empty() {
            return Ok(());
        }

        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("INSERT INTO listings ({}) ", LISTING_COLUMNS));
        query.push_values(listings, |mut b, listing| {
            b.push_bind(listing.id)
                .push_bind(listing.seller_id.as_str())
                .push_bind(&listing.title)
                .push_bind(&listing.description)
                .push_bind(&listing.brand)
                .push_bind(listing.category_id)
                .push_bind(listing.price)
                .push_bind(listing.discounted_price)
                .push_bind(listing.original_price)
                .push_bind(listing.quantity)
                .push_bind(&listing.unit)
                .push_bind(listing.condition.to_string())
                .push_bind(listing.manufacturer_date)
                .push_bind(listing.expiry_date)
                .push_bind(listing.best_before)
                .push_bind(&listing.pickup_address)
                .push_bind(listing.is_delivery_available)
                .push_bind(listing.delivery_fee)
                .push_bind(&listing.size)
                .push_bind(&listing.allergen_info)
                .push_bind(&listing.storage_info)
                .push_bind(listing.is_donation)
                .push_bind(listing.commission)
                .push_bind(listing.status.to_string())
                .push_bind(listing.created_at)
                .push_bind(listing.updated_at);
        });
        query
            .build()
            .execute(&mut **tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let images: Vec<(Uuid, &ListingImage)> = listings
            .iter()
            .flat_map(|listing| listing.images.iter().map(move |image| (listing.id, image)))
            .collect();
        if !images.is_empty() {
            let mut query: QueryBuilder<Postgres> =
                QueryBuilder::new("INSERT INTO listing_images (id, listing_id, url) ");
            query.push_values(images, |mut b, (listing_id, image)| {
                b.push_bind(image.id)
                    .push_bind(listing_id)
                    .push_bind(&image.url);
            });
            query
                .build()
                .execute(&mut **tx)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;
        }

        for listing in listings {
            if listing.payment_methods.is_empty() {
                continue;
            }
            let methods: Vec<String> = listing
                .payment_methods
                .iter()
                .map(|method| method.to_string())
                .collect();
            sqlx::query(
                r#"INSERT INTO listing_payment_methods (listing_id, payment_method_id)
                SELECT $1, id FROM payment_methods WHERE method = ANY($2)"#,
            )
            .bind(listing.id)
            .bind(&methods)
            .execute(&mut **tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;
        }

        Ok(())
    }
}

#[async_trait]
impl ListingRepository for ListingRepositoryPostgres {
    async fn save(&self, listing: &Listing) -> Result<(), RepositoryError> {
        self.save_batch(std::slice::from_ref(listing)).await
    }

    async fn save_batch(&self, listings: &[Listing]) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::Persistence)?;

        Self::insert_all(&mut tx, listings).await?;

        tx.commit().await.map_err(|_| RepositoryError::Persistence)
    }

    async fn find_page(&self, filter: &ListingFilter) -> Result<Vec<Listing>, RepositoryError> {
        let mut query: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {} FROM listings WHERE 1=1",
            LISTING_COLUMNS
        ));

        if let Some(category_id) = filter.category_id {
            query.push(" AND category_id = ");
            query.push_bind(category_id);
        }

        if let Some(ref seller_id) = filter.seller_id {
            query.push(" AND seller_id = ");
            query.push_bind(seller_id.as_str());
        }

        if let Some(status) = filter.status {
            query.push(" AND status = ");
            query.push_bind(status.to_string());
        }

        query.push(" ORDER BY created_at DESC LIMIT ");
        query.push_bind(filter.limit);
        query.push(" OFFSET ");
        query.push_bind(filter.offset);

        let entities = query
            .build_query_as::<ListingEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let listing_ids: Vec<Uuid> = entities.iter().map(|entity| entity.id).collect();

        let image_rows = sqlx::query_as::<_, ListingImageEntity>(
            "SELECT id, listing_id, url FROM listing_images WHERE listing_id = ANY($1) ORDER BY listing_id",
        )
        .bind(&listing_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let mut images_map: HashMap<Uuid, Vec<ListingImage>> = HashMap::new();
        for row in image_rows {
            images_map
                .entry(row.listing_id)
                .or_default()
                .push(ListingImage {
                    id: row.id,
                    url: row.url,
                });
        }

        let method_rows = sqlx::query_as::<_, ListingPaymentMethodEntity>(
            r#"SELECT lpm.listing_id, pm.method FROM listing_payment_methods lpm
            JOIN payment_methods pm ON pm.id = lpm.payment_method_id
            WHERE lpm.listing_id = ANY($1)"#,
        )
        .bind(&listing_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let mut methods_map: HashMap<Uuid, Vec<PaymentMethod>> = HashMap::new();
        for row in method_rows {
            if let Ok(method) = row.method.parse::<PaymentMethod>() {
                methods_map.entry(row.listing_id).or_default().push(method);
            }
        }

        Ok(entities
            .into_iter()
            .map(|entity| {
                let images = images_map.remove(&entity.id).unwrap_or_default();
                let methods = methods_map.remove(&entity.id).unwrap_or_default();
                entity.into_domain(images, methods)
            })
            .collect())
    }
}
