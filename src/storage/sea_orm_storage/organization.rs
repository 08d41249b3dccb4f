//! 组织架构存储操作：校区、学院、专业、培养方案、方向
//!
//! 子级通过外键 `ON DELETE CASCADE` 挂在父级下，删除校区会连带删除其下所有层级。

use super::{SeaOrmStorage, db_err, now_ts};
use crate::entity::prelude::{Campuses, Curriculums, Faculties, Majors, Programs};
use crate::entity::{campuses, curriculums, faculties, majors, programs};
use crate::errors::Result;
use crate::models::organization::{
    entities::{Campus, Curriculum, Faculty, Major, Program},
    requests::{
        CreateCampusRequest, CreateCurriculumRequest, CreateFacultyRequest, CreateMajorRequest,
        CreateProgramRequest, UpdateCampusRequest, UpdateCurriculumRequest, UpdateFacultyRequest,
        UpdateMajorRequest, UpdateProgramRequest,
    },
    responses::{CampusDetail, CurriculumDetail, FacultyDetail, MajorDetail, ProgramDetail},
};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, ModelTrait, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出校区
    pub async fn list_campuses_impl(&self) -> Result<Vec<Campus>> {
        let rows = Campuses::find()
            .order_by_asc(campuses::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询校区列表"))?;

        Ok(rows.into_iter().map(|m| m.into_campus()).collect())
    }

    /// 校区详情，附带学院
    pub async fn get_campus_detail_impl(&self, id: i64) -> Result<Option<CampusDetail>> {
        let Some(campus) = Campuses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询校区"))?
        else {
            return Ok(None);
        };

        let faculties = campus
            .find_related(Faculties)
            .all(&self.db)
            .await
            .map_err(db_err("查询校区学院"))?;

        Ok(Some(CampusDetail {
            campus: campus.into_campus(),
            faculties: faculties.into_iter().map(|m| m.into_faculty()).collect(),
        }))
    }

    pub async fn create_campus_impl(&self, req: CreateCampusRequest) -> Result<Campus> {
        let now = now_ts();

        let model = campuses::ActiveModel {
            campus_code: Set(req.campus_code),
            campus_name_th: Set(req.campus_name_th),
            campus_name_en: Set(req.campus_name_en),
            address: Set(req.address),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建校区"))?;
        Ok(result.into_campus())
    }

    pub async fn update_campus_impl(
        &self,
        id: i64,
        req: UpdateCampusRequest,
    ) -> Result<Option<Campus>> {
        let Some(existing) = Campuses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询校区"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(code) = req.campus_code {
            model.campus_code = Set(code);
        }
        if let Some(name) = req.campus_name_th {
            model.campus_name_th = Set(name);
        }
        if let Some(name) = req.campus_name_en {
            model.campus_name_en = Set(Some(name));
        }
        if let Some(address) = req.address {
            model.address = Set(Some(address));
        }
        model.updated_at = Set(now_ts());

        let result = model.update(&self.db).await.map_err(db_err("更新校区"))?;
        Ok(Some(result.into_campus()))
    }

    pub async fn delete_campus_impl(&self, id: i64) -> Result<bool> {
        let result = Campuses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除校区"))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出学院
    pub async fn list_faculties_impl(&self) -> Result<Vec<Faculty>> {
        let rows = Faculties::find()
            .order_by_asc(faculties::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询学院列表"))?;

        Ok(rows.into_iter().map(|m| m.into_faculty()).collect())
    }

    /// 学院详情，附带所属校区与专业
    pub async fn get_faculty_detail_impl(&self, id: i64) -> Result<Option<FacultyDetail>> {
        let Some(faculty) = Faculties::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询学院"))?
        else {
            return Ok(None);
        };

        let campus = faculty
            .find_related(Campuses)
            .one(&self.db)
            .await
            .map_err(db_err("查询学院所属校区"))?;
        let programs = faculty
            .find_related(Programs)
            .all(&self.db)
            .await
            .map_err(db_err("查询学院专业"))?;

        Ok(Some(FacultyDetail {
            faculty: faculty.into_faculty(),
            campus: campus.map(|m| m.into_campus()),
            programs: programs.into_iter().map(|m| m.into_program()).collect(),
        }))
    }

    pub async fn create_faculty_impl(&self, req: CreateFacultyRequest) -> Result<Faculty> {
        let now = now_ts();

        let model = faculties::ActiveModel {
            campus_id: Set(req.campus_id),
            faculty_name_th: Set(req.faculty_name_th),
            faculty_name_en: Set(req.faculty_name_en),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建学院"))?;
        Ok(result.into_faculty())
    }

    pub async fn update_faculty_impl(
        &self,
        id: i64,
        req: UpdateFacultyRequest,
    ) -> Result<Option<Faculty>> {
        let Some(existing) = Faculties::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询学院"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(campus_id) = req.campus_id {
            model.campus_id = Set(campus_id);
        }
        if let Some(name) = req.faculty_name_th {
            model.faculty_name_th = Set(name);
        }
        if let Some(name) = req.faculty_name_en {
            model.faculty_name_en = Set(Some(name));
        }
        model.updated_at = Set(now_ts());

        let result = model.update(&self.db).await.map_err(db_err("更新学院"))?;
        Ok(Some(result.into_faculty()))
    }

    pub async fn delete_faculty_impl(&self, id: i64) -> Result<bool> {
        let result = Faculties::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除学院"))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出专业
    pub async fn list_programs_impl(&self) -> Result<Vec<Program>> {
        let rows = Programs::find()
            .order_by_asc(programs::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询专业列表"))?;

        Ok(rows.into_iter().map(|m| m.into_program()).collect())
    }

    pub async fn get_program_detail_impl(&self, id: i64) -> Result<Option<ProgramDetail>> {
        let Some(program) = Programs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询专业"))?
        else {
            return Ok(None);
        };

        let faculty = program
            .find_related(Faculties)
            .one(&self.db)
            .await
            .map_err(db_err("查询专业所属学院"))?;
        let curriculums = program
            .find_related(Curriculums)
            .all(&self.db)
            .await
            .map_err(db_err("查询专业培养方案"))?;

        Ok(Some(ProgramDetail {
            program: program.into_program(),
            faculty: faculty.map(|m| m.into_faculty()),
            curriculums: curriculums.into_iter().map(|m| m.into_curriculum()).collect(),
        }))
    }

    pub async fn create_program_impl(&self, req: CreateProgramRequest) -> Result<Program> {
        let now = now_ts();

        let model = programs::ActiveModel {
            faculty_id: Set(req.faculty_id),
            program_name_th: Set(req.program_name_th),
            program_name_en: Set(req.program_name_en),
            abbreviation: Set(req.abbreviation),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建专业"))?;
        Ok(result.into_program())
    }

    pub async fn update_program_impl(
        &self,
        id: i64,
        req: UpdateProgramRequest,
    ) -> Result<Option<Program>> {
        let Some(existing) = Programs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询专业"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(faculty_id) = req.faculty_id {
            model.faculty_id = Set(faculty_id);
        }
        if let Some(name) = req.program_name_th {
            model.program_name_th = Set(name);
        }
        if let Some(name) = req.program_name_en {
            model.program_name_en = Set(Some(name));
        }
        if let Some(abbreviation) = req.abbreviation {
            model.abbreviation = Set(Some(abbreviation));
        }
        model.updated_at = Set(now_ts());

        let result = model.update(&self.db).await.map_err(db_err("更新专业"))?;
        Ok(Some(result.into_program()))
    }

    pub async fn delete_program_impl(&self, id: i64) -> Result<bool> {
        let result = Programs::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除专业"))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出培养方案
    pub async fn list_curriculums_impl(&self) -> Result<Vec<Curriculum>> {
        let rows = Curriculums::find()
            .order_by_asc(curriculums::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询培养方案列表"))?;

        Ok(rows.into_iter().map(|m| m.into_curriculum()).collect())
    }

    pub async fn get_curriculum_detail_impl(&self, id: i64) -> Result<Option<CurriculumDetail>> {
        let Some(curriculum) = Curriculums::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询培养方案"))?
        else {
            return Ok(None);
        };

        let program = curriculum
            .find_related(Programs)
            .one(&self.db)
            .await
            .map_err(db_err("查询培养方案所属专业"))?;
        let majors = curriculum
            .find_related(Majors)
            .all(&self.db)
            .await
            .map_err(db_err("查询培养方案方向"))?;

        Ok(Some(CurriculumDetail {
            curriculum: curriculum.into_curriculum(),
            program: program.map(|m| m.into_program()),
            majors: majors.into_iter().map(|m| m.into_major()).collect(),
        }))
    }

    pub async fn create_curriculum_impl(&self, req: CreateCurriculumRequest) -> Result<Curriculum> {
        let now = now_ts();

        let model = curriculums::ActiveModel {
            program_id: Set(req.program_id),
            curriculum_name_th: Set(req.curriculum_name_th),
            curriculum_name_en: Set(req.curriculum_name_en),
            academic_year: Set(req.academic_year),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(db_err("创建培养方案"))?;
        Ok(result.into_curriculum())
    }

    pub async fn update_curriculum_impl(
        &self,
        id: i64,
        req: UpdateCurriculumRequest,
    ) -> Result<Option<Curriculum>> {
        let Some(existing) = Curriculums::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询培养方案"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(program_id) = req.program_id {
            model.program_id = Set(program_id);
        }
        if let Some(name) = req.curriculum_name_th {
            model.curriculum_name_th = Set(name);
        }
        if let Some(name) = req.curriculum_name_en {
            model.curriculum_name_en = Set(Some(name));
        }
        if let Some(year) = req.academic_year {
            model.academic_year = Set(Some(year));
        }
        model.updated_at = Set(now_ts());

        let result = model
            .update(&self.db)
            .await
            .map_err(db_err("更新培养方案"))?;
        Ok(Some(result.into_curriculum()))
    }

    pub async fn delete_curriculum_impl(&self, id: i64) -> Result<bool> {
        let result = Curriculums::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除培养方案"))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出方向
    pub async fn list_majors_impl(&self) -> Result<Vec<Major>> {
        let rows = Majors::find()
            .order_by_asc(majors::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询方向列表"))?;

        Ok(rows.into_iter().map(|m| m.into_major()).collect())
    }

    pub async fn get_major_detail_impl(&self, id: i64) -> Result<Option<MajorDetail>> {
        let Some(major) = Majors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询方向"))?
        else {
            return Ok(None);
        };

        let curriculum = major
            .find_related(Curriculums)
            .one(&self.db)
            .await
            .map_err(db_err("查询方向所属培养方案"))?;

        Ok(Some(MajorDetail {
            major: major.into_major(),
            curriculum: curriculum.map(|m| m.into_curriculum()),
        }))
    }

    pub async fn create_major_impl(&self, req: CreateMajorRequest) -> Result<Major> {
        let now = now_ts();

        let model = majors::ActiveModel {
            curriculum_id: Set(req.curriculum_id),
            major_name_th: Set(req.major_name_th),
            major_name_en: Set(req.major_name_en),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建方向"))?;
        Ok(result.into_major())
    }

    pub async fn update_major_impl(
        &self,
        id: i64,
        req: UpdateMajorRequest,
    ) -> Result<Option<Major>> {
        let Some(existing) = Majors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询方向"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(curriculum_id) = req.curriculum_id {
            model.curriculum_id = Set(curriculum_id);
        }
        if let Some(name) = req.major_name_th {
            model.major_name_th = Set(name);
        }
        if let Some(name) = req.major_name_en {
            model.major_name_en = Set(Some(name));
        }
        model.updated_at = Set(now_ts());

        let result = model.update(&self.db).await.map_err(db_err("更新方向"))?;
        Ok(Some(result.into_major()))
    }

    pub async fn delete_major_impl(&self, id: i64) -> Result<bool> {
        let result = Majors::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除方向"))?;

        Ok(result.rows_affected > 0)
    }
}
