use super::{SeaOrmStorage, db_err, now_ts};
use crate::entity::companies::{self, ActiveModel, Column};
use crate::entity::prelude::{Companies, StudentTrainings};
use crate::errors::Result;
use crate::models::companies::{
    entities::Company,
    requests::{CreateCompanyRequest, UpdateCompanyRequest},
    responses::CompanyDetail,
};
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder, Set,
};

/// 在给定连接（或事务）上插入实习单位
pub(crate) async fn insert_company<C: ConnectionTrait>(
    db: &C,
    req: CreateCompanyRequest,
) -> Result<companies::Model> {
    let now = now_ts();

    let model = ActiveModel {
        company_register_number: Set(req.company_register_number),
        company_name_th: Set(req.company_name_th),
        company_name_en: Set(req.company_name_en),
        company_address: Set(req.company_address),
        company_map: Set(req.company_map),
        company_email: Set(req.company_email),
        company_phone_number: Set(req.company_phone_number),
        company_type: Set(req.company_type),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    model.insert(db).await.map_err(db_err("创建实习单位"))
}

/// 合并更新字段，未给出的字段保持不变
pub(crate) fn merge_company(model: &mut ActiveModel, req: UpdateCompanyRequest) {
    if let Some(v) = req.company_register_number {
        model.company_register_number = Set(Some(v));
    }
    if let Some(v) = req.company_name_th {
        model.company_name_th = Set(v);
    }
    if let Some(v) = req.company_name_en {
        model.company_name_en = Set(Some(v));
    }
    if let Some(v) = req.company_address {
        model.company_address = Set(Some(v));
    }
    if let Some(v) = req.company_map {
        model.company_map = Set(Some(v));
    }
    if let Some(v) = req.company_email {
        model.company_email = Set(Some(v));
    }
    if let Some(v) = req.company_phone_number {
        model.company_phone_number = Set(Some(v));
    }
    if let Some(v) = req.company_type {
        model.company_type = Set(Some(v));
    }
    model.updated_at = Set(now_ts());
}

impl SeaOrmStorage {
    pub async fn list_companies_impl(&self) -> Result<Vec<Company>> {
        let rows = Companies::find()
            .order_by_asc(Column::CompanyNameTh)
            .all(&self.db)
            .await
            .map_err(db_err("查询实习单位列表"))?;

        Ok(rows.into_iter().map(|m| m.into_company()).collect())
    }

    /// 实习单位详情，附带在此实习的记录
    pub async fn get_company_detail_impl(&self, id: i64) -> Result<Option<CompanyDetail>> {
        let Some(company) = Companies::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询实习单位"))?
        else {
            return Ok(None);
        };

        let trainings = company
            .find_related(StudentTrainings)
            .all(&self.db)
            .await
            .map_err(db_err("查询实习记录"))?;

        Ok(Some(CompanyDetail {
            company: company.into_company(),
            student_trainings: trainings
                .into_iter()
                .map(|m| m.into_student_training())
                .collect(),
        }))
    }

    pub async fn create_company_impl(&self, req: CreateCompanyRequest) -> Result<Company> {
        let result = insert_company(&self.db, req).await?;
        Ok(result.into_company())
    }

    pub async fn update_company_impl(
        &self,
        id: i64,
        req: UpdateCompanyRequest,
    ) -> Result<Option<Company>> {
        let Some(existing) = Companies::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询实习单位"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        merge_company(&mut model, req);

        let result = model
            .update(&self.db)
            .await
            .map_err(db_err("更新实习单位"))?;
        Ok(Some(result.into_company()))
    }

    pub async fn delete_company_impl(&self, id: i64) -> Result<bool> {
        let result = Companies::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除实习单位"))?;

        Ok(result.rows_affected > 0)
    }
}
