//! 人员档案存储操作：学生、教师、职员

use super::{SeaOrmStorage, db_err, now_ts};
use crate::entity::prelude::{
    CourseCommittees, CourseInstructors, CourseSections, Curriculums, Faculties, Instructors,
    Majors, Programs, Staffs, StudentEnrolls, Students, Users,
};
use crate::entity::{
    course_committees, course_instructors, course_sections, instructors, staffs, students,
};
use crate::errors::Result;
use crate::models::courses::entities::CourseSection;
use crate::models::people::{
    entities::{Instructor, Staff, Student},
    requests::{
        CreateInstructorRequest, CreateStaffRequest, CreateStudentRequest,
        UpdateInstructorRequest, UpdateStaffRequest, UpdateStudentRequest,
    },
    responses::{InstructorDetail, StaffDetail, StudentDetail},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, ModelTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

impl SeaOrmStorage {
    pub async fn list_students_impl(&self) -> Result<Vec<Student>> {
        let rows = Students::find()
            .order_by_asc(students::Column::StudentCode)
            .all(&self.db)
            .await
            .map_err(db_err("查询学生列表"))?;

        Ok(rows.into_iter().map(|m| m.into_student()).collect())
    }

    /// 学生详情，附带账号、所属组织与选课记录
    pub async fn get_student_detail_impl(&self, id: i64) -> Result<Option<StudentDetail>> {
        let Some(student) = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询学生"))?
        else {
            return Ok(None);
        };

        let user = Users::find_by_id(student.user_id)
            .one(&self.db)
            .await
            .map_err(db_err("查询学生账号"))?;

        let faculty = match student.faculty_id {
            Some(fid) => Faculties::find_by_id(fid)
                .one(&self.db)
                .await
                .map_err(db_err("查询学院"))?,
            None => None,
        };
        let program = match student.program_id {
            Some(pid) => Programs::find_by_id(pid)
                .one(&self.db)
                .await
                .map_err(db_err("查询专业"))?,
            None => None,
        };
        let curriculum = match student.curriculum_id {
            Some(cid) => Curriculums::find_by_id(cid)
                .one(&self.db)
                .await
                .map_err(db_err("查询培养方案"))?,
            None => None,
        };
        let major = match student.major_id {
            Some(mid) => Majors::find_by_id(mid)
                .one(&self.db)
                .await
                .map_err(db_err("查询方向"))?,
            None => None,
        };

        let enrollments = student
            .find_related(StudentEnrolls)
            .all(&self.db)
            .await
            .map_err(db_err("查询学生选课"))?;

        Ok(Some(StudentDetail {
            student: student.into_student(),
            user: user.map(|m| m.into_user()),
            faculty: faculty.map(|m| m.into_faculty()),
            program: program.map(|m| m.into_program()),
            curriculum: curriculum.map(|m| m.into_curriculum()),
            major: major.map(|m| m.into_major()),
            enrollments: enrollments
                .into_iter()
                .map(|m| m.into_student_enroll())
                .collect(),
        }))
    }

    pub async fn create_student_impl(&self, req: CreateStudentRequest) -> Result<Student> {
        let now = now_ts();

        let model = students::ActiveModel {
            user_id: Set(req.user_id),
            student_code: Set(req.student_code),
            first_name: Set(req.first_name),
            middle_name: Set(req.middle_name),
            last_name: Set(req.last_name),
            email: Set(req.email),
            phone: Set(req.phone),
            gpax: Set(req.gpax),
            faculty_id: Set(req.faculty_id),
            program_id: Set(req.program_id),
            curriculum_id: Set(req.curriculum_id),
            major_id: Set(req.major_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建学生"))?;
        Ok(result.into_student())
    }

    pub async fn update_student_impl(
        &self,
        id: i64,
        req: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let Some(existing) = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询学生"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(code) = req.student_code {
            model.student_code = Set(code);
        }
        if let Some(first_name) = req.first_name {
            model.first_name = Set(first_name);
        }
        if let Some(middle_name) = req.middle_name {
            model.middle_name = Set(Some(middle_name));
        }
        if let Some(last_name) = req.last_name {
            model.last_name = Set(last_name);
        }
        if let Some(email) = req.email {
            model.email = Set(Some(email));
        }
        if let Some(phone) = req.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(gpax) = req.gpax {
            model.gpax = Set(Some(gpax));
        }
        if let Some(faculty_id) = req.faculty_id {
            model.faculty_id = Set(Some(faculty_id));
        }
        if let Some(program_id) = req.program_id {
            model.program_id = Set(Some(program_id));
        }
        if let Some(curriculum_id) = req.curriculum_id {
            model.curriculum_id = Set(Some(curriculum_id));
        }
        if let Some(major_id) = req.major_id {
            model.major_id = Set(Some(major_id));
        }
        model.updated_at = Set(now_ts());

        let result = model.update(&self.db).await.map_err(db_err("更新学生"))?;
        Ok(Some(result.into_student()))
    }

    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除学生"))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_instructors_impl(&self) -> Result<Vec<Instructor>> {
        let rows = Instructors::find()
            .order_by_asc(instructors::Column::StaffCode)
            .all(&self.db)
            .await
            .map_err(db_err("查询教师列表"))?;

        Ok(rows.into_iter().map(|m| m.into_instructor()).collect())
    }

    /// 教师详情，附带授课与委员会课程班
    pub async fn get_instructor_detail_impl(&self, id: i64) -> Result<Option<InstructorDetail>> {
        let Some(instructor) = Instructors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询教师"))?
        else {
            return Ok(None);
        };

        let user = Users::find_by_id(instructor.user_id)
            .one(&self.db)
            .await
            .map_err(db_err("查询教师账号"))?;

        let teaching_ids: Vec<i64> = CourseInstructors::find()
            .select_only()
            .column(course_instructors::Column::CourseSectionId)
            .filter(course_instructors::Column::InstructorId.eq(id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err("查询授课课程班"))?;
        let committee_ids: Vec<i64> = CourseCommittees::find()
            .select_only()
            .column(course_committees::Column::CourseSectionId)
            .filter(course_committees::Column::InstructorId.eq(id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err("查询委员会课程班"))?;

        Ok(Some(InstructorDetail {
            instructor: instructor.into_instructor(),
            user: user.map(|m| m.into_user()),
            teaching_sections: self.sections_by_ids(teaching_ids).await?,
            committee_sections: self.sections_by_ids(committee_ids).await?,
        }))
    }

    async fn sections_by_ids(&self, ids: Vec<i64>) -> Result<Vec<CourseSection>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = CourseSections::find()
            .filter(course_sections::Column::Id.is_in(ids))
            .order_by_asc(course_sections::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err("查询课程班"))?;

        Ok(rows.into_iter().map(|m| m.into_course_section()).collect())
    }

    pub async fn get_instructor_by_user_id_impl(&self, user_id: i64) -> Result<Option<Instructor>> {
        let result = Instructors::find()
            .filter(instructors::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(db_err("查询教师"))?;

        Ok(result.map(|m| m.into_instructor()))
    }

    pub async fn create_instructor_impl(&self, req: CreateInstructorRequest) -> Result<Instructor> {
        let now = now_ts();

        let model = instructors::ActiveModel {
            user_id: Set(req.user_id),
            staff_code: Set(req.staff_code),
            academic_title: Set(req.academic_title),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            email: Set(req.email),
            phone: Set(req.phone),
            faculty_id: Set(req.faculty_id),
            program_id: Set(req.program_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建教师"))?;
        Ok(result.into_instructor())
    }

    pub async fn update_instructor_impl(
        &self,
        id: i64,
        req: UpdateInstructorRequest,
    ) -> Result<Option<Instructor>> {
        let Some(existing) = Instructors::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询教师"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(code) = req.staff_code {
            model.staff_code = Set(code);
        }
        if let Some(title) = req.academic_title {
            model.academic_title = Set(Some(title));
        }
        if let Some(first_name) = req.first_name {
            model.first_name = Set(first_name);
        }
        if let Some(last_name) = req.last_name {
            model.last_name = Set(last_name);
        }
        if let Some(email) = req.email {
            model.email = Set(Some(email));
        }
        if let Some(phone) = req.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(faculty_id) = req.faculty_id {
            model.faculty_id = Set(Some(faculty_id));
        }
        if let Some(program_id) = req.program_id {
            model.program_id = Set(Some(program_id));
        }
        model.updated_at = Set(now_ts());

        let result = model.update(&self.db).await.map_err(db_err("更新教师"))?;
        Ok(Some(result.into_instructor()))
    }

    pub async fn delete_instructor_impl(&self, id: i64) -> Result<bool> {
        let result = Instructors::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除教师"))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn list_staffs_impl(&self) -> Result<Vec<Staff>> {
        let rows = Staffs::find()
            .order_by_asc(staffs::Column::StaffCode)
            .all(&self.db)
            .await
            .map_err(db_err("查询职员列表"))?;

        Ok(rows.into_iter().map(|m| m.into_staff()).collect())
    }

    pub async fn get_staff_detail_impl(&self, id: i64) -> Result<Option<StaffDetail>> {
        let Some(staff) = Staffs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询职员"))?
        else {
            return Ok(None);
        };

        let user = staff
            .find_related(Users)
            .one(&self.db)
            .await
            .map_err(db_err("查询职员账号"))?;

        Ok(Some(StaffDetail {
            staff: staff.into_staff(),
            user: user.map(|m| m.into_user()),
        }))
    }

    pub async fn create_staff_impl(&self, req: CreateStaffRequest) -> Result<Staff> {
        let now = now_ts();

        let model = staffs::ActiveModel {
            user_id: Set(req.user_id),
            staff_code: Set(req.staff_code),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            email: Set(req.email),
            phone: Set(req.phone),
            campus_id: Set(req.campus_id),
            faculty_id: Set(req.faculty_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(db_err("创建职员"))?;
        Ok(result.into_staff())
    }

    pub async fn update_staff_impl(
        &self,
        id: i64,
        req: UpdateStaffRequest,
    ) -> Result<Option<Staff>> {
        let Some(existing) = Staffs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err("查询职员"))?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(code) = req.staff_code {
            model.staff_code = Set(code);
        }
        if let Some(first_name) = req.first_name {
            model.first_name = Set(first_name);
        }
        if let Some(last_name) = req.last_name {
            model.last_name = Set(last_name);
        }
        if let Some(email) = req.email {
            model.email = Set(Some(email));
        }
        if let Some(phone) = req.phone {
            model.phone = Set(Some(phone));
        }
        if let Some(campus_id) = req.campus_id {
            model.campus_id = Set(Some(campus_id));
        }
        if let Some(faculty_id) = req.faculty_id {
            model.faculty_id = Set(Some(faculty_id));
        }
        model.updated_at = Set(now_ts());

        let result = model.update(&self.db).await.map_err(db_err("更新职员"))?;
        Ok(Some(result.into_staff()))
    }

    pub async fn delete_staff_impl(&self, id: i64) -> Result<bool> {
        let result = Staffs::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err("删除职员"))?;

        Ok(result.rows_affected > 0)
    }
}
