//! 巡访照片的存储操作，文件本体由服务层落盘

use super::{SeaOrmStorage, db_err, now_ts};
use crate::entity::prelude::VisitsPictures;
use crate::entity::visits_pictures::{ActiveModel, Column};
use crate::errors::Result;
use crate::models::trainings::{
    entities::VisitsPicture,
    requests::{NewVisitsPicture, UpdateVisitsPictureRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn list_visits_pictures_impl(&self) -> Result<Vec<VisitsPicture>> {
        let rows = VisitsPictures::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询巡访照片列表"))?;

        Ok(rows.into_iter().map(|m| m.into_visits_picture()).collect())
    }

    /// 某次巡访的照片，按编号排序
    pub async fn list_schedule_pictures_impl(
        &self,
        visitor_schedule_id: i64,
    ) -> Result<Vec<VisitsPicture>> {
        let rows = VisitsPictures::find()
            .filter(Column::VisitorScheduleId.eq(visitor_schedule_id))
            .order_by_asc(Column::PhotoNo)
            .all(&self.db)
            .await
            .map_err(db_err("查询巡访照片"))?;

        Ok(rows.into_iter().map(|m| m.into_visits_picture()).collect())
    }

    pub async fn get_visits_picture_impl(&self, id: i64) -> Result<Option<VisitsPicture>> {
        let result = VisitsPictures::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询巡访照片"))?;

        Ok(result.map(|m| m.into_visits_picture()))
    }

    pub async fn create_visits_picture_impl(
        &self,
        picture: NewVisitsPicture,
    ) -> Result<VisitsPicture> {
        let now = now_ts();

        let model = ActiveModel {
            visitor_schedule_id: Set(picture.visitor_schedule_id),
            photo_no: Set(picture.photo_no),
            file_name: Set(picture.file_name),
            original_name: Set(picture.original_name),
            file_size: Set(picture.file_size),
            file_type: Set(picture.file_type),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_err("保存巡访照片"))?;
        Ok(result.into_visits_picture())
    }

    pub async fn update_visits_picture_impl(
        &self,
        id: i64,
        req: UpdateVisitsPictureRequest,
    ) -> Result<Option<VisitsPicture>> {
        let Some(existing) = VisitsPictures::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询巡访照片"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(photo_no) = req.photo_no {
            model.photo_no = Set(photo_no);
        }
        if let Some(name) = req.original_name {
            model.original_name = Set(name);
        }
        model.updated_at = Set(now_ts());

        let result = model
            .update(&self.db)
            .await
            .map_err(db_err("更新巡访照片"))?;
        Ok(Some(result.into_visits_picture()))
    }

    pub async fn delete_visits_picture_impl(&self, id: i64) -> Result<Option<VisitsPicture>> {
        let Some(existing) = VisitsPictures::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询巡访照片"))?
        else {
            return Ok(None);
        };

        VisitsPictures::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除巡访照片"))?;

        Ok(Some(existing.into_visits_picture()))
    }
}
