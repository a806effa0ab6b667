use crate::utils::format::Locale;

/// Fixed user facing strings of the panel, one table per locale.
pub struct Texts {
    pub active: &'static str,
    pub inactive: &'static str,
    pub paid: &'static str,
    pub pending: &'static str,
    pub late: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,
    pub pay: &'static str,
    pub paid_on: &'static str,
    pub error_prefix: &'static str,

    pub employee_added: &'static str,
    pub employee_add_failed: &'static str,
    pub salary_paid: &'static str,
    pub salary_pay_failed: &'static str,
    pub salaries_generated: &'static str,
    pub salaries_generate_failed: &'static str,
    pub confirm_generate: &'static str,

    pub employees_title: &'static str,
    pub salaries_title: &'static str,
    pub add_employee: &'static str,
    pub generate_salaries: &'static str,
    pub all_months: &'static str,
    pub all_statuses: &'static str,
    pub filter: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub update: &'static str,

    pub employee_columns: [&'static str; 6],
    pub salary_columns: [&'static str; 8],
}

const AR: Texts = Texts {
    active: "نشط",
    inactive: "غير نشط",
    paid: "مدفوع",
    pending: "معلق",
    late: "متأخر",
    edit: "تعديل",
    delete: "حذف",
    pay: "دفع",
    paid_on: "تم الدفع في",
    error_prefix: "خطأ",

    employee_added: "تم إضافة الموظف بنجاح",
    employee_add_failed: "حدث خطأ أثناء إضافة الموظف",
    salary_paid: "تم دفع الراتب بنجاح",
    salary_pay_failed: "حدث خطأ أثناء دفع الراتب",
    salaries_generated: "تم إنشاء الرواتب بنجاح",
    salaries_generate_failed: "حدث خطأ أثناء إنشاء الرواتب",
    confirm_generate: "هل تريد إنشاء رواتب لجميع الموظفين لهذا الشهر؟",

    employees_title: "الموظفون",
    salaries_title: "الرواتب",
    add_employee: "إضافة موظف",
    generate_salaries: "إنشاء رواتب الشهر",
    all_months: "كل الشهور",
    all_statuses: "كل الحالات",
    filter: "تصفية",
    save: "حفظ",
    cancel: "إلغاء",
    yes: "نعم",
    no: "لا",
    update: "تحديث",

    employee_columns: ["الاسم", "الوظيفة", "الراتب", "تاريخ التعيين", "الحالة", "إجراءات"],
    salary_columns: [
        "الموظف", "الشهر", "الراتب الأساسي", "البدلات", "الخصومات", "صافي الراتب", "الحالة", "إجراءات",
    ],
};

const EN: Texts = Texts {
    active: "Active",
    inactive: "Inactive",
    paid: "Paid",
    pending: "Pending",
    late: "Late",
    edit: "Edit",
    delete: "Delete",
    pay: "Pay",
    paid_on: "Paid on",
    error_prefix: "Error",

    employee_added: "Employee added successfully",
    employee_add_failed: "Something went wrong while adding the employee",
    salary_paid: "Salary paid successfully",
    salary_pay_failed: "Something went wrong while paying the salary",
    salaries_generated: "Salaries generated successfully",
    salaries_generate_failed: "Something went wrong while generating salaries",
    confirm_generate: "Generate this month's salaries for all employees?",

    employees_title: "Employees",
    salaries_title: "Salaries",
    add_employee: "Add employee",
    generate_salaries: "Generate month salaries",
    all_months: "All months",
    all_statuses: "All statuses",
    filter: "Filter",
    save: "Save",
    cancel: "Cancel",
    yes: "Yes",
    no: "No",
    update: "Update",

    employee_columns: ["Name", "Position", "Salary", "Hire date", "Status", "Actions"],
    salary_columns: [
        "Employee", "Month", "Basic salary", "Bonuses", "Deductions", "Net salary", "Status", "Actions",
    ],
};

pub fn texts(locale: Locale) -> &'static Texts {
    match locale {
        Locale::Ar => &AR,
        Locale::En => &EN,
    }
}
