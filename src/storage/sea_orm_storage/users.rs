use super::{SeaOrmStorage, db_err, now_ts};
use crate::entity::prelude::{Instructors, Staffs, Students, Users};
use crate::entity::users::{ActiveModel, Column};
use crate::errors::Result;
use crate::models::users::{
    entities::{User, UserStatus},
    requests::{CreateUserRequest, UpdateUserRequest},
    responses::UserDetail,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, IntoActiveModel, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建用户
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = now_ts();

        let model = ActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(req.password),
            role: Set(req.role.to_string()),
            status: Set(UserStatus::Active.to_string()),
            display_name: Set(req.display_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建用户"))?;

        Ok(result.into_user())
    }

    /// 通过 ID 获取用户
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询用户"))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 通过用户名或邮箱获取用户
    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        let result = Users::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(identifier))
                    .add(Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(db_err("查询用户"))?;

        Ok(result.map(|m| m.into_user()))
    }

    /// 用户详情，附带其学生、教师或职员档案
    pub async fn get_user_detail_impl(&self, id: i64) -> Result<Option<UserDetail>> {
        let Some(user) = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询用户"))?
        else {
            return Ok(None);
        };

        let student = user
            .find_related(Students)
            .one(&self.db)
            .await
            .map_err(db_err("查询学生档案"))?;
        let instructor = user
            .find_related(Instructors)
            .one(&self.db)
            .await
            .map_err(db_err("查询教师档案"))?;
        let staff = user
            .find_related(Staffs)
            .one(&self.db)
            .await
            .map_err(db_err("查询职员档案"))?;

        Ok(Some(UserDetail {
            user: user.into_user(),
            student: student.map(|m| m.into_student()),
            instructor: instructor.map(|m| m.into_instructor()),
            staff: staff.map(|m| m.into_staff()),
        }))
    }

    /// 列出用户
    pub async fn list_users_impl(&self) -> Result<Vec<User>> {
        let users = Users::find()
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(db_err("查询用户列表"))?;

        Ok(users.into_iter().map(|m| m.into_user()).collect())
    }

    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find()
            .count(&self.db)
            .await
            .map_err(db_err("统计用户数量"))
    }

    /// 更新用户最后登录时间
    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now_ts()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err("更新最后登录时间"))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新用户信息，password 字段需已哈希
    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let Some(existing) = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询用户"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();

        if let Some(email) = update.email {
            model.email = Set(email);
        }

        if let Some(password) = update.password {
            model.password_hash = Set(password);
        }

        if let Some(role) = update.role {
            model.role = Set(role.to_string());
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        if let Some(display_name) = update.display_name {
            model.display_name = Set(Some(display_name));
        }

        model.updated_at = Set(now_ts());

        let result = model.update(&self.db).await.map_err(db_err("更新用户"))?;
        Ok(Some(result.into_user()))
    }

    /// 删除用户，其人员档案随外键级联删除
    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除用户"))?;

        Ok(result.rows_affected > 0)
    }
}
