//! 课程、课程班及其教师/委员会关联的存储操作

use super::{SeaOrmStorage, db_err, now_ts};
use crate::entity::prelude::{
    CourseCommittees, CourseInstructors, CourseSections, Courses, Curriculums, Instructors,
    StudentEnrolls,
};
use crate::entity::{
    course_committees, course_instructors, course_sections, courses, instructors, student_enrolls,
};
use crate::errors::{CoopError, Result};
use crate::models::courses::{
    entities::{Course, CourseSection, CourseSectionMember, SectionMemberKind},
    requests::{
        CreateCourseRequest, CreateCourseSectionRequest, UpdateCourseRequest,
        UpdateCourseSectionRequest,
    },
    responses::{CourseDetail, CourseSectionDetail},
};
use crate::models::people::entities::Instructor;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, IntoActiveModel, ModelTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

/// 插入关联行的结果：唯一索引冲突视为已关联
pub(super) fn attached_or_duplicate(
    result: std::result::Result<CourseSectionMember, sea_orm::DbErr>,
) -> Result<Option<CourseSectionMember>> {
    match result {
        Ok(member) => Ok(Some(member)),
        Err(e) => match CoopError::from(e) {
            CoopError::Conflict(_) => Ok(None),
            other => Err(other),
        },
    }
}

/// 课程班关联的教师 id，可在事务中调用
pub(crate) async fn section_member_ids<C: ConnectionTrait>(
    db: &C,
    kind: SectionMemberKind,
    course_section_id: i64,
) -> Result<Vec<i64>> {
    let ids = match kind {
        SectionMemberKind::Instructor => CourseInstructors::find()
            .select_only()
            .column(course_instructors::Column::InstructorId)
            .filter(course_instructors::Column::CourseSectionId.eq(course_section_id))
            .order_by_asc(course_instructors::Column::Id)
            .into_tuple()
            .all(db)
            .await
            .map_err(db_err("查询授课教师"))?,
        SectionMemberKind::Committee => CourseCommittees::find()
            .select_only()
            .column(course_committees::Column::InstructorId)
            .filter(course_committees::Column::CourseSectionId.eq(course_section_id))
            .order_by_asc(course_committees::Column::Id)
            .into_tuple()
            .all(db)
            .await
            .map_err(db_err("查询委员会成员"))?,
    };
    Ok(ids)
}

impl SeaOrmStorage {
    pub async fn list_courses_impl(&self) -> Result<Vec<Course>> {
        let rows = Courses::find()
            .order_by_asc(courses::Column::CourseCode)
            .all(&self.db)
            .await
            .map_err(db_err("查询课程列表"))?;

        Ok(rows.into_iter().map(|m| m.into_course()).collect())
    }

    /// 课程详情，附带培养方案与课程班
    pub async fn get_course_detail_impl(&self, id: i64) -> Result<Option<CourseDetail>> {
        let Some(course) = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询课程"))?
        else {
            return Ok(None);
        };

        let curriculum = course
            .find_related(Curriculums)
            .one(&self.db)
            .await
            .map_err(db_err("查询课程培养方案"))?;
        let sections = course
            .find_related(CourseSections)
            .order_by_asc(course_sections::Column::Section)
            .all(&self.db)
            .await
            .map_err(db_err("查询课程班"))?;

        Ok(Some(CourseDetail {
            course: course.into_course(),
            curriculum: curriculum.map(|m| m.into_curriculum()),
            sections: sections
                .into_iter()
                .map(|m| m.into_course_section())
                .collect(),
        }))
    }

    pub async fn create_course_impl(&self, req: CreateCourseRequest) -> Result<Course> {
        let now = now_ts();

        let model = courses::ActiveModel {
            curriculum_id: Set(req.curriculum_id),
            course_code: Set(req.course_code),
            course_name_th: Set(req.course_name_th),
            course_name_en: Set(req.course_name_en),
            course_type: Set(req.course_type.to_string()),
            credits: Set(req.credits),
            description: Set(req.description),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建课程"))?;
        Ok(result.into_course())
    }

    pub async fn update_course_impl(
        &self,
        id: i64,
        req: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let Some(existing) = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询课程"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(curriculum_id) = req.curriculum_id {
            model.curriculum_id = Set(Some(curriculum_id));
        }
        if let Some(code) = req.course_code {
            model.course_code = Set(code);
        }
        if let Some(name) = req.course_name_th {
            model.course_name_th = Set(name);
        }
        if let Some(name) = req.course_name_en {
            model.course_name_en = Set(Some(name));
        }
        if let Some(course_type) = req.course_type {
            model.course_type = Set(course_type.to_string());
        }
        if let Some(credits) = req.credits {
            model.credits = Set(Some(credits));
        }
        if let Some(description) = req.description {
            model.description = Set(Some(description));
        }
        model.updated_at = Set(now_ts());

        let result = model.update(&self.db).await.map_err(db_err("更新课程"))?;
        Ok(Some(result.into_course()))
    }

    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除课程"))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_course_sections_impl(&self) -> Result<Vec<CourseSection>> {
        let rows = CourseSections::find()
            .order_by_desc(course_sections::Column::Year)
            .order_by_desc(course_sections::Column::Semester)
            .order_by_asc(course_sections::Column::Section)
            .all(&self.db)
            .await
            .map_err(db_err("查询课程班列表"))?;

        Ok(rows.into_iter().map(|m| m.into_course_section()).collect())
    }

    /// 课程班详情，附带课程、授课教师、委员会与选课人数
    pub async fn get_course_section_detail_impl(
        &self,
        id: i64,
    ) -> Result<Option<CourseSectionDetail>> {
        let Some(section) = CourseSections::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询课程班"))?
        else {
            return Ok(None);
        };

        let course = section
            .find_related(Courses)
            .one(&self.db)
            .await
            .map_err(db_err("查询课程"))?;

        let instructors = self
            .section_member_instructors(SectionMemberKind::Instructor, id)
            .await?;
        let committees = self
            .section_member_instructors(SectionMemberKind::Committee, id)
            .await?;

        let enrollment_count = StudentEnrolls::find()
            .filter(student_enrolls::Column::CourseSectionId.eq(id))
            .count(&self.db)
            .await
            .map_err(db_err("统计选课人数"))?;

        Ok(Some(CourseSectionDetail {
            section: section.into_course_section(),
            course: course.map(|m| m.into_course()),
            instructors,
            committees,
            enrollment_count: enrollment_count as i64,
        }))
    }

    async fn section_member_instructors(
        &self,
        kind: SectionMemberKind,
        course_section_id: i64,
    ) -> Result<Vec<Instructor>> {
        let ids = section_member_ids(&self.db, kind, course_section_id).await?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = Instructors::find()
            .filter(instructors::Column::Id.is_in(ids))
            .order_by_asc(instructors::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询教师"))?;

        Ok(rows.into_iter().map(|m| m.into_instructor()).collect())
    }

    pub async fn create_course_section_impl(
        &self,
        req: CreateCourseSectionRequest,
    ) -> Result<CourseSection> {
        let now = now_ts();

        let model = course_sections::ActiveModel {
            course_id: Set(req.course_id),
            section: Set(req.section),
            semester: Set(req.semester),
            year: Set(req.year),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建课程班"))?;
        Ok(result.into_course_section())
    }

    pub async fn update_course_section_impl(
        &self,
        id: i64,
        req: UpdateCourseSectionRequest,
    ) -> Result<Option<CourseSection>> {
        let Some(existing) = CourseSections::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询课程班"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(course_id) = req.course_id {
            model.course_id = Set(course_id);
        }
        if let Some(section) = req.section {
            model.section = Set(section);
        }
        if let Some(semester) = req.semester {
            model.semester = Set(semester);
        }
        if let Some(year) = req.year {
            model.year = Set(year);
        }
        model.updated_at = Set(now_ts());

        let result = model.update(&self.db).await.map_err(db_err("更新课程班"))?;
        Ok(Some(result.into_course_section()))
    }

    pub async fn delete_course_section_impl(&self, id: i64) -> Result<bool> {
        let result = CourseSections::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除课程班"))?;

        Ok(result.rows_affected > 0)
    }

    /// 关联教师到课程班
    ///
    /// 先查重再插入；并发下两次插入同一对时由唯一索引兜底，冲突同样按已关联处理。
    pub async fn attach_section_member_impl(
        &self,
        kind: SectionMemberKind,
        course_section_id: i64,
        instructor_id: i64,
    ) -> Result<Option<CourseSectionMember>> {
        let instructor = Instructors::find_by_id(instructor_id)
            .one(&self.db)
            .await
            .map_err(db_err("查询教师"))?;
        if instructor.is_none() {
            return Err(CoopError::not_found("Instructor not found"));
        }

        let section = CourseSections::find_by_id(course_section_id)
            .one(&self.db)
            .await
            .map_err(db_err("查询课程班"))?;
        if section.is_none() {
            return Err(CoopError::not_found("Course section not found"));
        }

        if section_member_ids(&self.db, kind, course_section_id)
            .await?
            .contains(&instructor_id)
        {
            return Ok(None);
        }

        let now = now_ts();
        let inserted = match kind {
            SectionMemberKind::Instructor => course_instructors::ActiveModel {
                course_section_id: Set(course_section_id),
                instructor_id: Set(instructor_id),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map(|m| m.into_member()),
            SectionMemberKind::Committee => course_committees::ActiveModel {
                course_section_id: Set(course_section_id),
                instructor_id: Set(instructor_id),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&self.db)
            .await
            .map(|m| m.into_member()),
        };

        attached_or_duplicate(inserted)
    }

    /// 解除关联，不存在时返回 0
    pub async fn detach_section_member_impl(
        &self,
        kind: SectionMemberKind,
        course_section_id: i64,
        instructor_id: i64,
    ) -> Result<u64> {
        let result = match kind {
            SectionMemberKind::Instructor => CourseInstructors::delete_many()
                .filter(course_instructors::Column::CourseSectionId.eq(course_section_id))
                .filter(course_instructors::Column::InstructorId.eq(instructor_id))
                .exec(&self.db)
                .await
                .map_err(db_err("解除授课关联"))?,
            SectionMemberKind::Committee => CourseCommittees::delete_many()
                .filter(course_committees::Column::CourseSectionId.eq(course_section_id))
                .filter(course_committees::Column::InstructorId.eq(instructor_id))
                .exec(&self.db)
                .await
                .map_err(db_err("解除委员会关联"))?,
        };

        Ok(result.rows_affected)
    }
}
