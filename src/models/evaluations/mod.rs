pub mod entities;
pub mod requests;

/// 新建实习安排时为学生预置的实习单位评价题目
pub const DEFAULT_STUDENT_QUESTIONS: [&str; 5] = [
    "ความเหมาะสมของลักษณะงานกับสาขาวิชาที่เรียน",
    "ความเป็นมิตรและให้ความร่วมมือของพนักงาน",
    "สภาพแวดล้อมในการทำงาน (ความสะอาด ปลอดภัย)",
    "ความชัดเจนในการมอบหมายงาน",
    "โอกาสในการเรียนรู้และพัฒนาทักษะระหว่างการฝึกงาน",
];

/// 巡访教师对实习单位的评价题目
pub const DEFAULT_VISITOR_COMPANY_QUESTIONS: [&str; 5] = DEFAULT_STUDENT_QUESTIONS;

/// 巡访教师对学生的评价题目
pub const DEFAULT_VISITOR_STUDENT_QUESTIONS: [&str; 6] = [
    "ความรู้ความสามารถทางวิชาการ",
    "ความตั้งใจและรับผิดชอบในงาน",
    "มนุษยสัมพันธ์และการทำงานร่วมกับผู้อื่น",
    "การตรงต่อเวลาและวินัยในการทำงาน",
    "ความคิดริเริ่มสร้างสรรค์",
    "ความเหมาะสมของบุคลิกภาพในการทำงาน",
];

pub const MAX_SCORE: i32 = 100;
